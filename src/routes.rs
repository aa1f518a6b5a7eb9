//! Top-level router configuration combining operator endpoints and pages.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (JSON)
//! - `{base}/static/*`   - Static assets, under the history base
//! - everything else     - Pages, resolved through the route table under the history base
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Location of static assets relative to the history base.
pub const STATIC_PREFIX: &str = "/static";

/// Constructs the application router without path normalization.
///
/// Integration tests drive this router directly.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let static_path = state.router.history().href(STATIC_PREFIX);

    Router::new()
        .route("/health", get(health_handler))
        .nest_service(&static_path, ServeDir::new(static_dir))
        .merge(web::routes::page_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/app/login/` renders the
/// same page as `/app/login`.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
