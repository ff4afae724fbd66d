//! # Request Logging Middleware
//!
//! Attaches a request id to every request and logs method, path, status,
//! and latency. An `x-request-id` header from an upstream proxy is honored
//! when it looks like a valid correlation id.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use logging::{log_api_request, request_id, RequestId};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log the request and echo the request id back to the caller.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(request_id::try_from_header)
        .unwrap_or_else(RequestId::new);

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = std::time::Instant::now();

    let mut response = next.run(request).await;

    if path != "/health" {
        log_api_request!(
            request_id,
            method,
            path,
            response.status().as_u16(),
            start.elapsed().as_millis()
        );
    }

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
