//! View entity identifying a page-level component.

use serde::Serialize;
use std::fmt;

/// A page-level view the application can render.
///
/// The router only carries this reference around. Rendering belongs to the
/// web layer (see [`crate::web::handlers`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Login,
    Register,
    Dev,
}

impl View {
    /// All views in declaration order.
    pub const ALL: [View; 4] = [View::Home, View::Login, View::Register, View::Dev];

    /// Stable machine name, used in logs and JSON.
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Login => "login",
            View::Register => "register",
            View::Dev => "dev",
        }
    }

    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Login => "Sign in",
            View::Register => "Create account",
            View::Dev => "Development",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names_are_unique() {
        let mut names: Vec<_> = View::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), View::ALL.len());
    }

    #[test]
    fn test_view_display_uses_name() {
        assert_eq!(View::Register.to_string(), "register");
        assert_eq!(View::Dev.to_string(), "dev");
    }

    #[test]
    fn test_view_serializes_lowercase() {
        let json = serde_json::to_value(View::Login).unwrap();
        assert_eq!(json, "login");
    }
}
