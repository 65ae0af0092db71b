use axum::{
    body::{Bytes, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    response::{JsonApiResponse, log_app_error},
};

const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Rewrites framework-produced failures (unknown path, wrong method, empty
/// 5xx) into the JSON envelope. Responses that are already JSON or HTML pass
/// through untouched, as does anything requested by a browser.
pub async fn json_error_middleware(req: Request, next: Next) -> Response {
    let wants_html = header_contains(req.headers(), header::ACCEPT, &["text/html"]);
    let response = next.run(req).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    if wants_html
        || header_contains(
            response.headers(),
            header::CONTENT_TYPE,
            &["application/json", "+json", "text/html"],
        )
    {
        return response;
    }

    let (parts, body) = response.into_parts();
    let message = match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => message_from_body(status, &bytes),
        Err(_) => canonical_message(status),
    };

    let app_error = error_for_status(status, message);
    if status.is_server_error() {
        log_app_error(&app_error, status);
    }

    let mut envelope = JsonApiResponse::from_error(&app_error).into_response();
    carry_headers(&parts.headers, envelope.headers_mut());
    envelope
}

fn header_contains(headers: &HeaderMap, name: header::HeaderName, needles: &[&str]) -> bool {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let value = value.to_ascii_lowercase();
            needles.iter().any(|needle| value.contains(needle))
        })
        .unwrap_or(false)
}

fn message_from_body(status: StatusCode, bytes: &Bytes) -> String {
    let message = String::from_utf8_lossy(bytes).trim().to_string();
    if message.is_empty() {
        canonical_message(status)
    } else {
        message
    }
}

fn canonical_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

fn error_for_status(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::METHOD_NOT_ALLOWED => AppError::method_not_allowed(message),
        StatusCode::BAD_REQUEST => AppError::bad_request(message),
        StatusCode::INTERNAL_SERVER_ERROR => AppError::internal(message),
        _ => AppError::with_status(status, message),
    }
}

fn carry_headers(src: &HeaderMap, dest: &mut HeaderMap) {
    for (name, value) in src {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH {
            continue;
        }
        dest.append(name.clone(), value.clone());
    }
}
