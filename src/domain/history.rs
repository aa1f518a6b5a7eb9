//! History-mode location handling.
//!
//! In history mode the application lives under a base URL (for example
//! `/app`), and real URL paths below it are application locations:
//!
//! ```text
//! request path     base    location
//! /app/login       /app    /login
//! /app             /app    /
//! /login           ""      /login
//! ```

use crate::error::RouteError;

/// History configuration built from the deployment's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    /// Normalized base: empty for the root, otherwise `/segment[/segment...]`
    /// without a trailing slash.
    base: String,
}

impl WebHistory {
    /// Creates a history rooted at `base`.
    ///
    /// Normalization:
    /// - `""` and `"/"` mean no prefix
    /// - a missing leading `/` is added (`app/` becomes `/app`)
    /// - trailing slashes are removed
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidBase`] if `base` contains whitespace,
    /// a query or a fragment.
    pub fn new(base: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidBase {
            base: base.to_string(),
            reason,
        };

        if base.contains(['?', '#']) {
            return Err(invalid("base must not contain a query or fragment"));
        }
        if base.chars().any(char::is_whitespace) {
            return Err(invalid("base must not contain whitespace"));
        }

        let trimmed = base.trim_end_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        Ok(Self { base })
    }

    /// History rooted at `/`.
    pub fn root() -> Self {
        Self {
            base: String::new(),
        }
    }

    /// Normalized base, empty when the application is mounted at the root.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether `pathname` lies under the base.
    ///
    /// The prefix check is ASCII case-insensitive and stops at segment
    /// boundaries: `/application` is not under `/app`.
    pub fn contains(&self, pathname: &str) -> bool {
        self.strip_base(pathname).is_some()
    }

    /// Converts a request pathname into an application location.
    ///
    /// Pathnames outside the base are returned unchanged.
    pub fn location(&self, pathname: &str) -> String {
        match self.strip_base(pathname) {
            Some("") => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            Some(rest) => format!("/{rest}"),
            None => pathname.to_string(),
        }
    }

    /// Builds a full href for an application location.
    pub fn href(&self, location: &str) -> String {
        if location.starts_with('/') {
            format!("{}{}", self.base, location)
        } else {
            format!("{}/{}", self.base, location)
        }
    }

    fn strip_base<'a>(&self, pathname: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(pathname);
        }

        let prefix = pathname.get(..self.base.len())?;
        if !prefix.eq_ignore_ascii_case(&self.base) {
            return None;
        }

        let rest = &pathname[self.base.len()..];
        if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_normalization() {
        assert_eq!(WebHistory::new("").unwrap().base(), "");
        assert_eq!(WebHistory::new("/").unwrap().base(), "");
        assert_eq!(WebHistory::new("/app/").unwrap().base(), "/app");
        assert_eq!(WebHistory::new("app").unwrap().base(), "/app");
        assert_eq!(WebHistory::new("/a/b//").unwrap().base(), "/a/b");
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            WebHistory::new("/app?x=1"),
            Err(RouteError::InvalidBase { .. })
        ));
        assert!(matches!(
            WebHistory::new("/#/"),
            Err(RouteError::InvalidBase { .. })
        ));
        assert!(matches!(
            WebHistory::new("/my app"),
            Err(RouteError::InvalidBase { .. })
        ));
    }

    #[test]
    fn test_location_at_root() {
        let history = WebHistory::root();
        assert_eq!(history.location("/"), "/");
        assert_eq!(history.location("/register"), "/register");
    }

    #[test]
    fn test_location_strips_base() {
        let history = WebHistory::new("/app/").unwrap();
        assert_eq!(history.location("/app/register"), "/register");
        assert_eq!(history.location("/app"), "/");
        assert_eq!(history.location("/app/"), "/");
        assert_eq!(history.location("/APP/login"), "/login");
        assert_eq!(history.location("/app?x=1"), "/?x=1");
    }

    #[test]
    fn test_location_outside_base_is_unchanged() {
        let history = WebHistory::new("/app").unwrap();
        assert_eq!(history.location("/login"), "/login");
        assert_eq!(history.location("/application"), "/application");
        assert!(!history.contains("/application"));
        assert!(!history.contains("/ap"));
        assert!(history.contains("/app/dev"));
    }

    #[test]
    fn test_href() {
        let history = WebHistory::new("/app").unwrap();
        assert_eq!(history.href("/"), "/app/");
        assert_eq!(history.href("/login"), "/app/login");
        assert_eq!(history.href("dev"), "/app/dev");

        let root = WebHistory::root();
        assert_eq!(root.href("/"), "/");
        assert_eq!(root.href("/register"), "/register");
    }

    #[test]
    fn test_href_location_roundtrip() {
        let history = WebHistory::new("/base").unwrap();
        for location in ["/", "/login", "/register", "/dev"] {
            assert_eq!(history.location(&history.href(location)), location);
        }
    }
}
