mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use page_router::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_declared_pages_render() {
    let server = common::create_test_server("/");

    for (path, marker) in [
        ("/", "Welcome"),
        ("/login", "login-form"),
        ("/register", "register-form"),
        ("/dev", "Routes"),
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        response.assert_text_contains(marker);
    }
}

#[tokio::test]
async fn test_register_page_is_served_for_register_path() {
    let server = common::create_test_server("/");

    let response = server.get("/register").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<title>Create account</title>"));
    assert!(!html.contains("login-form"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = common::create_test_server("/");

    let response = server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text_contains("Page not found");
    response.assert_text_contains("/nope");
}

#[tokio::test]
async fn test_query_string_does_not_affect_matching() {
    let server = common::create_test_server("/");

    let response = server.get("/login?next=/dev").await;

    response.assert_status_ok();
    response.assert_text_contains("login-form");
}

#[tokio::test]
async fn test_matching_is_case_insensitive() {
    let server = common::create_test_server("/");

    let response = server.get("/Register").await;

    response.assert_status_ok();
    response.assert_text_contains("register-form");
}

#[tokio::test]
async fn test_post_to_page_is_method_not_allowed() {
    let server = common::create_test_server("/");

    let response = server.post("/login").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_text_contains("method_not_allowed");
    assert_eq!(response.header(header::ALLOW), "GET, HEAD");
}

#[tokio::test]
async fn test_head_on_page_returns_empty_ok() {
    let server = common::create_test_server("/");

    let response = server.method(Method::HEAD, "/login").await;

    response.assert_status_ok();
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_empty_trailing_segments_are_not_found() {
    let server = common::create_test_server("/");

    server.get("/dev//").await.assert_status(StatusCode::NOT_FOUND);
    server
        .get("/login//")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_percent_encoded_path_is_decoded() {
    let server = common::create_test_server("/");

    let response = server.get("/%72egister").await;
    response.assert_status_ok();
    response.assert_text_contains("register-form");

    server
        .get("/login%3Fnext")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pages_under_base() {
    let server = common::create_test_server("/app/");

    let response = server.get("/app/register").await;
    response.assert_status_ok();
    response.assert_text_contains("register-form");

    let response = server.get("/app").await;
    response.assert_status_ok();
    response.assert_text_contains("Welcome");
}

#[tokio::test]
async fn test_links_include_base() {
    let server = common::create_test_server("/app");

    let response = server.get("/app").await;

    response.assert_text_contains(r#"href="/app/login""#);
    response.assert_text_contains(r#"href="/app/register""#);
}

#[tokio::test]
async fn test_path_outside_base_is_not_found() {
    let server = common::create_test_server("/app");

    server
        .get("/register")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/application/register")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dev_page_shows_route_table() {
    let server = common::create_test_server("/app");

    let response = server.get("/app/dev").await;

    response.assert_status_ok();
    let html = response.text();
    for path in ["/login", "/register", "/dev"] {
        assert!(html.contains(&format!("<code>{path}</code>")), "missing {path}");
    }
    assert!(html.contains(r#"<tr class="active">"#));
    assert!(html.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let server = common::create_test_server("/");

    let response = server.get("/static/app.css").await;

    response.assert_status_ok();
    response.assert_text_contains(".topnav");
}

#[tokio::test]
async fn test_static_assets_are_served_under_base() {
    let server = common::create_test_server("/app/");

    let response = server.get("/app").await;
    response.assert_text_contains(r#"href="/app/static/app.css""#);

    let response = server.get("/app/static/app.css").await;
    response.assert_status_ok();
    response.assert_text_contains(".topnav");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app = app_router(common::create_test_state("/app"), common::STATIC_DIR);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/app/login/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
