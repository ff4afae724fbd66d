//! # API Error Responses
//!
//! The wire shape for API errors and its axum integration.
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "error": {
//!     "code": "NOT_FOUND",
//!     "message": "user_id not found"
//!   }
//! }
//! ```

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// The `error` object carried by every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable wire-level error code.
    pub code:    String,
    /// Human-readable message.
    pub message: String,
}

/// Top-level error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

impl ErrorBody {
    /// Create an error body from a code and message.
    pub fn new(code: impl ToString, message: impl ToString) -> Self {
        Self {
            error: ErrorDetail {
                code:    code.to_string(),
                message: message.to_string(),
            },
        }
    }
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self { Self::new(err.code(), err.public_message()) }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status() == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody::from(&self);
        match serde_json::to_string(&body) {
            Ok(json) => {
                Response::builder()
                    .status(self.status())
                    .header("Content-Type", "application/json")
                    .body(Body::from(json))
                    .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
            },
            Err(_) => (self.status(), Json(body)).into_response(),
        }
    }
}
