//! Development page.
//!
//! Shows what the router sees: crate version, normalized base and the route
//! table with the row for the current location highlighted. Nothing secret is
//! rendered here, so the page stays registered in every build.

use askama::Template;
use askama_web::WebTemplate;

use super::layout::Nav;
use crate::application::services::Navigation;
use crate::domain::entities::View;
use crate::state::AppState;

/// One row of the route table as shown on the page.
pub struct RouteRow {
    pub path: String,
    pub view: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "dev.html")]
pub struct DevTemplate {
    pub title: &'static str,
    pub nav: Nav,
    pub version: &'static str,
    pub base: String,
    pub location: String,
    pub routes: Vec<RouteRow>,
}

/// Renders the development page bound to `/dev`.
pub fn dev_page(state: &AppState, navigation: &Navigation) -> DevTemplate {
    let router = &state.router;
    let active = router
        .routes()
        .resolve(&navigation.location)
        .map(|route| route.path.as_str());

    let routes = router
        .routes()
        .iter()
        .map(|route| RouteRow {
            path: route.path.clone(),
            view: route.view.name(),
            href: router.history().href(&route.path),
            active: active == Some(route.path.as_str()),
        })
        .collect();

    let base = match router.history().base() {
        "" => "/".to_string(),
        base => base.to_string(),
    };

    DevTemplate {
        title: View::Dev.title(),
        nav: Nav::new(router),
        version: env!("CARGO_PKG_VERSION"),
        base,
        location: navigation.location.clone(),
        routes,
    }
}
