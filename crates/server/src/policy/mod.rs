//! # Domain Policy Engine
//!
//! Business rules for teams, users, pull requests, and reviewer
//! assignments. Handlers call into this module; every operation here issues
//! its reads and writes through an injected connection, and multi-statement
//! operations run inside an explicit transaction scope.
//!
//! Concurrent callers acting on the same pull request may race: the engine
//! relies on the store's default isolation level and takes no row locks.

pub mod pull_requests;
pub mod reviewers;
pub mod statistics;
pub mod teams;
pub mod users;

use error::AppError;

/// Map a failed write to a server error with a caller-safe message, logging
/// the underlying database error.
pub(crate) fn write_failed(err: sea_orm::DbErr, message: &'static str) -> AppError {
    tracing::error!(error = %err, "{}", message);
    AppError::server(message)
}
