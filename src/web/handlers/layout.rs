//! Navigation links shared by every page layout.

use crate::application::services::PageRouter;
use crate::domain::entities::View;
use crate::routes::STATIC_PREFIX;

/// Base-aware hrefs used by `templates/base.html`: nav links and the stylesheet.
pub struct Nav {
    pub home: String,
    pub login: String,
    pub register: String,
    pub dev: String,
    pub stylesheet: String,
}

impl Nav {
    pub fn new(router: &PageRouter) -> Self {
        let href = |view| router.href(view).unwrap_or_else(|| "#".to_string());
        Self {
            home: href(View::Home),
            login: href(View::Login),
            register: href(View::Register),
            dev: href(View::Dev),
            stylesheet: router
                .history()
                .href(&format!("{STATIC_PREFIX}/app.css")),
        }
    }
}
