//! Static asset tests.

mod common;

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;

use common::TestContext;

#[tokio::test]
async fn test_serve_stylesheet() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server.get("/static/css/style.css").await;

    response.assert_status_ok();
    assert_eq!(response.header(header::CONTENT_TYPE), "text/css");
    assert!(response.text().contains("font-family"));
}

#[tokio::test]
async fn test_serve_script() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server.get("/static/js/app.js").await;

    response.assert_status_ok();
    assert_eq!(response.header(header::CONTENT_TYPE), "text/javascript");
}

#[tokio::test]
async fn test_missing_asset() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server.get("/static/img/missing.png").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "404 Not Found");
}

#[tokio::test]
async fn test_directory_is_not_served() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server.get("/static/css").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_root_is_not_found() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    for path in ["/static", "/static/"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "404 Not Found");
    }
}
