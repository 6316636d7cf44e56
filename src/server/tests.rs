// Server module tests.

use super::*;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::config::Config;

fn router() -> Router {
    create_router(Analyzer::new(&Config::default()).expect("analyzer"))
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn analyze_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("request")
}

#[tokio::test]
async fn test_root_liveness() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    assert!(String::from_utf8_lossy(&bytes).starts_with("Meta Tag Analyzer API is running"));
}

#[tokio::test]
async fn test_health() {
    let response = router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_analyze_missing_url_is_bad_request() {
    for body in ["{}", r#"{"url": ""}"#, "", "not json"] {
        let response = router()
            .oneshot(analyze_request(body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        let json = json_body(response).await;
        assert_eq!(json, serde_json::json!({ "error": "URL is required" }));
    }
}

#[tokio::test]
async fn test_analyze_invalid_url_is_bad_request() {
    let response = router()
        .oneshot(analyze_request(r#"{"url": "ftp://example.com/file"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid URL");
}

#[tokio::test]
async fn test_serve_reports_bind_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let port = listener.local_addr().expect("addr").port();
    let analyzer = Analyzer::new(&Config::default()).expect("analyzer");

    let err = serve("127.0.0.1", port, analyzer)
        .await
        .expect_err("port is taken");
    assert!(err.to_string().contains("Failed to bind"));
}
