//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::page_handler;
use axum::Router;

/// Routes serving the application's pages.
///
/// Pages are not registered one by one: every request that reaches this
/// router goes to [`page_handler`], which strips the history base and looks
/// the location up in the route table. Merge it last so that `/health` and
/// the static mount take precedence.
pub fn page_routes() -> Router<AppState> {
    Router::new().fallback(page_handler)
}
