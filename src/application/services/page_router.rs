//! Page router: the route table combined with history-mode locations.

use crate::domain::entities::View;
use crate::domain::{RouteTable, WebHistory};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of resolving one location against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Application location, relative to the history base.
    pub location: String,
    /// View bound to the location, `None` when no route matched.
    pub view: Option<View>,
}

impl Navigation {
    pub fn is_matched(&self) -> bool {
        self.view.is_some()
    }
}

/// The router object installed by the application at startup.
///
/// Holds the immutable [`RouteTable`] and the [`WebHistory`] base. Cloning is
/// cheap and every clone shares the same table.
///
/// Resolution is pure; navigation state lives in
/// [`crate::application::services::Navigator`].
#[derive(Debug, Clone)]
pub struct PageRouter {
    routes: Arc<RouteTable>,
    history: WebHistory,
}

impl PageRouter {
    /// Creates a router over `routes` mounted at `history`'s base.
    pub fn new(routes: Arc<RouteTable>, history: WebHistory) -> Self {
        Self { routes, history }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn history(&self) -> &WebHistory {
        &self.history
    }

    /// Resolves an application location (base already removed).
    ///
    /// A location without a leading `/` is treated as relative to the root.
    pub fn resolve(&self, to: &str) -> Navigation {
        let location = if to.starts_with('/') {
            to.to_string()
        } else {
            format!("/{to}")
        };

        let view = self.routes.resolve(&location).map(|route| route.view);

        Navigation { location, view }
    }

    /// Resolves a full request pathname, base included.
    ///
    /// Returns `None` if the pathname lies outside the base.
    pub fn resolve_pathname(&self, pathname: &str) -> Option<Navigation> {
        if !self.history.contains(pathname) {
            return None;
        }
        Some(self.resolve(&self.history.location(pathname)))
    }

    /// Full href, base included, for the first route bound to `view`.
    pub fn href(&self, view: View) -> Option<String> {
        self.routes
            .path_for(view)
            .map(|path| self.history.href(path))
    }
}
