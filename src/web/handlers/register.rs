//! Registration page.

use askama::Template;
use askama_web::WebTemplate;

use super::layout::Nav;
use crate::domain::entities::View;
use crate::state::AppState;

/// Template for the registration page.
///
/// Renders `templates/register.html` with name, email and password inputs
/// and a link back to sign in.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub title: &'static str,
    pub nav: Nav,
}

/// Renders the registration page bound to `/register`.
pub fn register_page(state: &AppState) -> RegisterTemplate {
    RegisterTemplate {
        title: View::Register.title(),
        nav: Nav::new(&state.router),
    }
}
