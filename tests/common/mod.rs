#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use page_router::application::services::PageRouter;
use page_router::domain::{RouteTable, WebHistory};
use page_router::routes;
use page_router::state::AppState;
use std::sync::Arc;

pub const STATIC_DIR: &str = "static";

pub fn create_test_state(base: &str) -> AppState {
    let history = WebHistory::new(base).unwrap();
    AppState::new(PageRouter::new(Arc::new(RouteTable::app()), history))
}

pub fn create_test_router(base: &str) -> Router {
    routes::router(create_test_state(base), STATIC_DIR)
}

pub fn create_test_server(base: &str) -> TestServer {
    TestServer::new(create_test_router(base)).unwrap()
}
