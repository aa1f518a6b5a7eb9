mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use page_router::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state("/app/");
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["routes"]["status"], "ok");
    assert_eq!(json["checks"]["routes"]["message"], "4 routes");
    assert_eq!(json["checks"]["history"]["message"], "Base: /app");
}

#[tokio::test]
async fn test_health_is_not_shadowed_by_pages() {
    let server = common::create_test_server("/");

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["history"]["message"], "Base: /");
}
