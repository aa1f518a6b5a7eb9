//! Shared application state injected into every handler.

use crate::application::services::PageRouter;

/// State shared by all request handlers.
///
/// Cloned per request; the route table behind [`PageRouter`] is shared, never copied.
#[derive(Clone)]
pub struct AppState {
    pub router: PageRouter,
}

impl AppState {
    pub fn new(router: PageRouter) -> Self {
        Self { router }
    }
}
