//! Home page.

use askama::Template;
use askama_web::WebTemplate;

use super::layout::Nav;
use crate::domain::entities::View;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/home.html` with links to sign in or register.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub nav: Nav,
}

/// Renders the home page bound to `/`.
pub fn home_page(state: &AppState) -> HomeTemplate {
    HomeTemplate {
        title: View::Home.title(),
        nav: Nav::new(&state.router),
    }
}
