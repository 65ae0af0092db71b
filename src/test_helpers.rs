use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;

use crate::routes::app;

pub fn test_router() -> Router {
    app()
}

/// Drives one request through `router` and returns the status and body text.
pub async fn text_response(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let (status, bytes) = raw_response(router, request).await;
    let text = String::from_utf8(bytes).expect("body should be utf-8");
    (status, text)
}

pub async fn json_response(
    router: Router,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = raw_response(router, request).await;
    let json = serde_json::from_slice(&bytes).expect("body should be json");
    (status, json)
}

pub async fn send(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.expect("request should succeed")
}

async fn raw_response(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = send(router, request).await;
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, bytes.to_vec())
}
