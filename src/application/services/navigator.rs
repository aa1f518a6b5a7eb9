//! Session navigation over a [`PageRouter`].

use super::page_router::{Navigation, PageRouter};
use crate::domain::entities::View;

/// Tracks the active location and the back/forward entries of one session.
///
/// Entries after the current position are dropped on [`Navigator::push`],
/// the way browser session history behaves.
#[derive(Debug, Clone)]
pub struct Navigator {
    router: PageRouter,
    entries: Vec<Navigation>,
    position: usize,
}

impl Navigator {
    /// Creates a navigator with no current entry.
    pub fn new(router: PageRouter) -> Self {
        Self {
            router,
            entries: Vec::new(),
            position: 0,
        }
    }

    /// Creates a navigator whose first entry is taken from a full request
    /// pathname, base included.
    ///
    /// A pathname outside the base starts at the root location.
    pub fn start_at(router: PageRouter, pathname: &str) -> Self {
        let navigation = router
            .resolve_pathname(pathname)
            .unwrap_or_else(|| router.resolve("/"));

        Self {
            router,
            entries: vec![navigation],
            position: 0,
        }
    }

    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    /// Resolves `to` without changing any state.
    pub fn resolve(&self, to: &str) -> Navigation {
        self.router.resolve(to)
    }

    /// Navigates to `to`, making it the current entry.
    ///
    /// Unmatched locations are still recorded; their `view` is `None`.
    pub fn push(&mut self, to: &str) -> &Navigation {
        let navigation = self.router.resolve(to);
        log_navigation("push", &navigation);

        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
        }
        self.entries.push(navigation);
        self.position = self.entries.len() - 1;

        &self.entries[self.position]
    }

    /// Navigates to `to`, overwriting the current entry.
    pub fn replace(&mut self, to: &str) -> &Navigation {
        if self.entries.is_empty() {
            return self.push(to);
        }

        let navigation = self.router.resolve(to);
        log_navigation("replace", &navigation);

        self.entries[self.position] = navigation;
        &self.entries[self.position]
    }

    /// Moves one entry back. Returns `None` at the first entry.
    pub fn back(&mut self) -> Option<&Navigation> {
        if self.position == 0 || self.entries.is_empty() {
            return None;
        }
        self.position -= 1;
        self.entries.get(self.position)
    }

    /// Moves one entry forward. Returns `None` at the last entry.
    pub fn forward(&mut self) -> Option<&Navigation> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        self.entries.get(self.position)
    }

    pub fn current(&self) -> Option<&Navigation> {
        self.entries.get(self.position)
    }

    /// View of the current entry, `None` before the first navigation or
    /// when the current location matched nothing.
    pub fn active_view(&self) -> Option<View> {
        self.current().and_then(|navigation| navigation.view)
    }

    /// Full href, base included, for `view`.
    pub fn href(&self, view: View) -> Option<String> {
        self.router.href(view)
    }
}

fn log_navigation(kind: &str, navigation: &Navigation) {
    match navigation.view {
        Some(view) => tracing::debug!(kind, location = %navigation.location, %view, "Navigated"),
        None => tracing::debug!(kind, location = %navigation.location, "No route matched"),
    }
}
