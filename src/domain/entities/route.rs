//! Route entity binding a URL path to a view.

use super::View;
use serde::Serialize;

/// An association between a URL path and the view rendered for it.
///
/// Paths are validated when a [`crate::domain::route_table::RouteTable`] is
/// built, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub view: View,
}

impl Route {
    /// Creates a new route.
    ///
    /// # Examples
    ///
    /// ```
    /// use page_router::domain::entities::{Route, View};
    ///
    /// let route = Route::new("/login", View::Login);
    /// assert_eq!(route.path, "/login");
    /// ```
    pub fn new(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}
