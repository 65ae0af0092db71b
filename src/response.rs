use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// JSON envelope for every non-plain-text response the service emits.
#[derive(Debug, Serialize)]
pub struct JsonApiResponse<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub data: T,
}

impl JsonApiResponse<serde_json::Value> {
    pub(crate) fn from_error(err: &AppError) -> Self {
        let status = status_for(err);
        Self {
            status: status.as_u16(),
            message: err.message().to_string(),
            data: serde_json::Value::Null,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        JsonApiResponse::from_error(&self).into_response()
    }
}

impl<T: Serialize> IntoResponse for JsonApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

pub(crate) fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Status(status, _) => *status,
    }
}

pub(crate) fn log_app_error(err: &AppError, status: StatusCode) {
    tracing::error!(status = status.as_u16(), error = %err, "request failed");
}

#[cfg(test)]
mod tests {
    use axum::body;

    use super::*;

    #[test]
    fn each_error_maps_to_its_status() {
        let cases = [
            (AppError::bad_request("bad"), StatusCode::BAD_REQUEST),
            (AppError::not_found("missing"), StatusCode::NOT_FOUND),
            (
                AppError::method_not_allowed("nope"),
                StatusCode::METHOD_NOT_ALLOWED,
            ),
            (AppError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::with_status(StatusCode::UNAUTHORIZED, "Unauthorized"),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::with_status(StatusCode::SERVICE_UNAVAILABLE, "down"),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(status_for(&err), expected, "{err:?}");
        }
    }

    #[tokio::test]
    async fn error_renders_as_envelope() {
        let response = AppError::not_found("Not Found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be json");
        assert_eq!(
            json,
            serde_json::json!({ "status": 404, "message": "Not Found", "data": null })
        );
    }
}
