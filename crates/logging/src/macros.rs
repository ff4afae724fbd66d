//! # Logging Macros
//!
//! Convenience macros for structured logging with request correlation.

/// Log an API request with method, path, status, and latency.
#[macro_export]
macro_rules! log_api_request {
    ($request_id:expr, $method:expr, $path:expr, $status:expr, $duration_ms:expr) => {
        tracing::info!(
            target: "api",
            request_id = %$request_id,
            method = %$method,
            path = %$path,
            status = %$status,
            duration_ms = %$duration_ms,
            "API request"
        )
    };
}

/// Log an error with request ID and error details.
#[macro_export]
macro_rules! error_with_request {
    (target: $target:expr, $request_id:expr, $err:expr, $($arg:tt)*) => {
        tracing::error!(target: $target, request_id = %$request_id, error = %$err, $($arg)*)
    };
}
