//! # Quorum Error Infrastructure
//!
//! Error types and API error responses for the Quorum review service.
//!
//! Every fallible operation in the workspace returns [`Result`]. The
//! [`AppError`] variants carry the wire-level error code and HTTP status the
//! API contract requires, so handlers never translate errors by hand.

pub mod response;
pub mod traits;

pub use response::ErrorBody;
pub use traits::ResultExt;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    /// Unknown user reported by the activation endpoint. Carries the
    /// NOT_FOUND code but maps to 400, matching the wire contract of
    /// `POST /users/setIsActive`.
    #[error("NotFound: {message}")]
    UnknownUser {
        message: String,
    },

    #[error("TeamExists: {message}")]
    TeamExists {
        message: String,
    },

    #[error("PrExists: {message}")]
    PrExists {
        message: String,
    },

    #[error("PrMerged: {message}")]
    PrMerged {
        message: String,
    },

    #[error("NotAssigned: {message}")]
    NotAssigned {
        message: String,
    },

    #[error("NoCandidate: {message}")]
    NoCandidate {
        message: String,
    },

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    /// A server-side failure with a message that is safe to expose.
    #[error("Server: {message}")]
    Server {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },

    #[error("Migration: {message}")]
    Migration {
        message: String,
    },

    #[error("IO: {message}")]
    Io {
        message: String,
    },
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(message: impl ToString) -> Self {
        Self::NotFound {
            message: message.to_string(),
        }
    }

    /// Create an unknown-user error (400 with a NOT_FOUND code).
    #[inline]
    pub fn unknown_user(message: impl ToString) -> Self {
        Self::UnknownUser {
            message: message.to_string(),
        }
    }

    /// Create a duplicate-team error.
    #[inline]
    pub fn team_exists(message: impl ToString) -> Self {
        Self::TeamExists {
            message: message.to_string(),
        }
    }

    /// Create a duplicate-pull-request error.
    #[inline]
    pub fn pr_exists(message: impl ToString) -> Self {
        Self::PrExists {
            message: message.to_string(),
        }
    }

    /// Create a merged-pull-request conflict error.
    #[inline]
    pub fn pr_merged(message: impl ToString) -> Self {
        Self::PrMerged {
            message: message.to_string(),
        }
    }

    /// Create a reviewer-not-assigned conflict error.
    #[inline]
    pub fn not_assigned(message: impl ToString) -> Self {
        Self::NotAssigned {
            message: message.to_string(),
        }
    }

    /// Create a no-replacement-candidate conflict error.
    #[inline]
    pub fn no_candidate(message: impl ToString) -> Self {
        Self::NoCandidate {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create a server error whose message is safe to expose to callers.
    #[inline]
    pub fn server(message: impl ToString) -> Self {
        Self::Server {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a migration error.
    #[inline]
    pub fn migration(message: impl ToString) -> Self {
        Self::Migration {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::NotFound {
                ..
            } => http::StatusCode::NOT_FOUND,
            AppError::UnknownUser {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::TeamExists {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::PrExists {
                ..
            } => http::StatusCode::CONFLICT,
            AppError::PrMerged {
                ..
            } => http::StatusCode::CONFLICT,
            AppError::NotAssigned {
                ..
            } => http::StatusCode::CONFLICT,
            AppError::NoCandidate {
                ..
            } => http::StatusCode::CONFLICT,
            AppError::Validation {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::Server {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Migration {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the wire-level error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::UnknownUser {
                ..
            } => "NOT_FOUND",
            AppError::TeamExists {
                ..
            } => "TEAM_EXISTS",
            AppError::PrExists {
                ..
            } => "PR_EXISTS",
            AppError::PrMerged {
                ..
            } => "PR_MERGED",
            AppError::NotAssigned {
                ..
            } => "NOT_ASSIGNED",
            AppError::NoCandidate {
                ..
            } => "NO_CANDIDATE",
            AppError::Validation {
                ..
            } => "BAD_REQUEST",
            AppError::Server {
                ..
            } => "SERVER_ERROR",
            AppError::Database {
                ..
            } => "SERVER_ERROR",
            AppError::Internal {
                ..
            } => "SERVER_ERROR",
            AppError::Config {
                ..
            } => "SERVER_ERROR",
            AppError::Migration {
                ..
            } => "SERVER_ERROR",
            AppError::Io {
                ..
            } => "SERVER_ERROR",
        }
    }

    /// Get the raw error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound {
                message,
            }
            | AppError::UnknownUser {
                message,
            }
            | AppError::TeamExists {
                message,
            }
            | AppError::PrExists {
                message,
            }
            | AppError::PrMerged {
                message,
            }
            | AppError::NotAssigned {
                message,
            }
            | AppError::NoCandidate {
                message,
            }
            | AppError::Validation {
                message,
            }
            | AppError::Server {
                message,
            }
            | AppError::Database {
                message,
            }
            | AppError::Internal {
                message,
            }
            | AppError::Config {
                message,
            }
            | AppError::Migration {
                message,
            }
            | AppError::Io {
                message,
            } => message,
        }
    }

    /// Get the message exposed in API responses.
    ///
    /// Client errors and curated [`AppError::Server`] errors expose their
    /// message verbatim. Raw infrastructure failures are redacted so
    /// persistence details never leak to callers.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Database {
                ..
            }
            | AppError::Internal {
                ..
            }
            | AppError::Config {
                ..
            }
            | AppError::Migration {
                ..
            }
            | AppError::Io {
                ..
            } => "Internal Server Error",
            _ => self.message(),
        }
    }

    /// Add context to the error, preserving its kind.
    pub fn context(self, context: impl ToString) -> Self {
        let context_msg = context.to_string();
        let prefix = |message: String| format!("{}: {}", context_msg, message);
        match self {
            AppError::NotFound {
                message,
            } => {
                Self::NotFound {
                    message: prefix(message),
                }
            },
            AppError::UnknownUser {
                message,
            } => {
                Self::UnknownUser {
                    message: prefix(message),
                }
            },
            AppError::TeamExists {
                message,
            } => {
                Self::TeamExists {
                    message: prefix(message),
                }
            },
            AppError::PrExists {
                message,
            } => {
                Self::PrExists {
                    message: prefix(message),
                }
            },
            AppError::PrMerged {
                message,
            } => {
                Self::PrMerged {
                    message: prefix(message),
                }
            },
            AppError::NotAssigned {
                message,
            } => {
                Self::NotAssigned {
                    message: prefix(message),
                }
            },
            AppError::NoCandidate {
                message,
            } => {
                Self::NoCandidate {
                    message: prefix(message),
                }
            },
            AppError::Validation {
                message,
            } => {
                Self::Validation {
                    message: prefix(message),
                }
            },
            AppError::Server {
                message,
            } => {
                Self::Server {
                    message: prefix(message),
                }
            },
            AppError::Database {
                message,
            } => {
                Self::Database {
                    message: prefix(message),
                }
            },
            AppError::Internal {
                message,
            } => {
                Self::Internal {
                    message: prefix(message),
                }
            },
            AppError::Config {
                message,
            } => {
                Self::Config {
                    message: prefix(message),
                }
            },
            AppError::Migration {
                message,
            } => {
                Self::Migration {
                    message: prefix(message),
                }
            },
            AppError::Io {
                message,
            } => {
                Self::Io {
                    message: prefix(message),
                }
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert Sea-ORM database errors to AppError.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}

/// Convert validator validation errors to AppError.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string())
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        }
        else {
            messages.join(", ")
        };

        Self::Validation {
            message,
        }
    }
}
