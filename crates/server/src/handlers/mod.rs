//! # Request Handlers
//!
//! Translate HTTP requests into policy engine invocations and map results
//! to response DTOs. Status codes and error payloads come from the
//! [`error`] crate's taxonomy.

pub mod pull_request;
pub mod statistics;
pub mod team;
pub mod users;
