use axum::{Router, routing::get};

/// Body served by `GET /api/public`.
pub const GREETING: &str = "Hello my Test Keycloak";

pub fn router() -> Router {
    Router::new().route("/public", get(handler))
}

/// Ignores headers, query string and body. No authorization is applied here.
pub async fn handler() -> &'static str {
    tracing::debug!("serving public greeting");
    GREETING
}
