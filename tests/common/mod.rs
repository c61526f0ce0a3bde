//! Common test utilities

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use issue_tracker::{router, IssueStore};
use serde_json::Value;
use tower::ServiceExt;

/// Build a router over a fresh, empty store
pub fn test_app() -> Router {
    router(Arc::new(IssueStore::new()))
}

/// Send one request through `app` and return the status and raw body text
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let text = String::from_utf8(bytes.to_vec()).expect("Response body should be UTF-8");
    (status, text)
}

/// Send a JSON body and parse the JSON response
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: &Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    let (status, text) = send(app, request).await;
    (status, serde_json::from_str(&text).expect("Response should be JSON"))
}

/// Send a URL-encoded form body and parse the JSON response
pub async fn send_form(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    let (status, text) = send(app, request).await;
    (status, serde_json::from_str(&text).expect("Response should be JSON"))
}

/// GET a path and parse the JSON response
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    let (status, text) = send(app, request).await;
    (status, serde_json::from_str(&text).expect("Response should be JSON"))
}
