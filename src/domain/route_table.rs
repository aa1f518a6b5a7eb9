//! Ordered route table mapping URL paths to views.
//!
//! # Matching
//!
//! A request path matches a route when both are equal after:
//!
//! - dropping any query string or fragment from the request path
//! - dropping one trailing `/`, unless that leaves an empty path or another
//!   trailing `/` (`/` and `//` stay distinct)
//! - ASCII case folding
//!
//! The first matching route in table order wins. Since [`RouteTable::new`]
//! rejects paths that collide under this rule, order only matters for
//! [`RouteTable::path_for`] when a view is bound more than once.

use crate::domain::entities::{Route, View};
use crate::error::RouteError;

/// The application's ordered collection of routes.
///
/// Built once at startup and immutable afterwards; share it as
/// `Arc<RouteTable>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds a table from routes, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPath`] if a path is empty, does not start
    /// with `/`, or contains whitespace, `?` or `#`.
    /// Returns [`RouteError::DuplicatePath`] if two paths match the same requests.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        for (i, route) in routes.iter().enumerate() {
            validate_path(&route.path)?;

            let key = match_key(&route.path);
            if let Some(existing) = routes[..i].iter().find(|r| match_key(&r.path) == key) {
                return Err(RouteError::DuplicatePath {
                    path: route.path.clone(),
                    existing: existing.path.clone(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// The application's route table.
    ///
    /// | Path        | View     |
    /// |-------------|----------|
    /// | `/`         | Home     |
    /// | `/login`    | Login    |
    /// | `/register` | Register |
    /// | `/dev`      | Dev      |
    pub fn app() -> Self {
        Self {
            routes: vec![
                Route::new("/", View::Home),
                Route::new("/login", View::Login),
                Route::new("/register", View::Register),
                Route::new("/dev", View::Dev),
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Finds the first route matching a request path.
    ///
    /// Returns `None` when no route matches; what happens then is up to the caller.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let key = match_key(strip_query_and_fragment(path));
        self.routes.iter().find(|r| match_key(&r.path) == key)
    }

    /// Returns the path of the first route bound to `view`.
    pub fn path_for(&self, view: View) -> Option<&str> {
        self.routes
            .iter()
            .find(|r| r.view == view)
            .map(|r| r.path.as_str())
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

fn validate_path(path: &str) -> Result<(), RouteError> {
    let reason = if path.is_empty() {
        Some("path is empty")
    } else if !path.starts_with('/') {
        Some("path must start with '/'")
    } else if path.contains(['?', '#']) {
        Some("path must not contain a query or fragment")
    } else if path.chars().any(char::is_whitespace) {
        Some("path must not contain whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RouteError::InvalidPath {
            path: path.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// Comparison key: one trailing slash dropped, ASCII lowercase.
///
/// The slash is kept when dropping it would leave an empty path or another
/// trailing slash, so `//` and `/login//` never collapse onto `/` or `/login`.
fn match_key(path: &str) -> String {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
        _ => path,
    };
    trimmed.to_ascii_lowercase()
}
