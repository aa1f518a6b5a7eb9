//! HTTP server initialization and runtime setup.
//!
//! Builds the router object from the route table and configured base, then
//! runs the Axum server until Ctrl+C.

use crate::application::services::PageRouter;
use crate::config::Config;
use crate::domain::RouteTable;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state: the application route table under the
/// configured history base.
///
/// # Errors
///
/// Returns an error if `BASE_URL` is not a valid history base.
pub fn build_state(config: &Config) -> Result<AppState> {
    let history = config.history().context("Failed to configure history")?;
    let routes = Arc::new(RouteTable::app());

    for route in routes.iter() {
        tracing::debug!(
            path = %route.path,
            href = %history.href(&route.path),
            view = %route.view,
            "Route registered"
        );
    }
    tracing::info!(routes = routes.len(), base = history.base(), "Route table ready");

    Ok(AppState::new(PageRouter::new(routes, history)))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The history base is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
