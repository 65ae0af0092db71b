use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::middleware::{catch_panic_layer, json_error_middleware};

use super::public;

pub const API_PREFIX: &str = "/api";

/// Bare route table, no cross-cutting layers.
pub fn router() -> Router {
    Router::new().nest(API_PREFIX, public::router())
}

/// The router as served: error envelope, panic catcher and request tracing.
pub fn app() -> Router {
    router()
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
