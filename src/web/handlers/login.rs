//! Login page.

use askama::Template;
use askama_web::WebTemplate;

use super::layout::Nav;
use crate::domain::entities::View;
use crate::state::AppState;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Email and password inputs
/// - Link to the registration page
///
/// The form is not submitted anywhere; credentials are checked by the
/// account service, not by this server.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub title: &'static str,
    pub nav: Nav,
}

/// Renders the login page bound to `/login`.
pub fn login_page(state: &AppState) -> LoginTemplate {
    LoginTemplate {
        title: View::Login.title(),
        nav: Nav::new(&state.router),
    }
}
