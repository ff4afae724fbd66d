//! # Statistics Data Transfer Objects

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Query parameters for the reviewer count endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewersAmountQuery {
    /// Restrict the count to one pull request; all pull requests otherwise
    pub pull_request_id: Option<String>,
}

/// Reviewer counts keyed by pull request id.
///
/// Pull requests with no assignment rows are absent rather than reported
/// as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewersAmountResponse {
    pub reviewers_amount: IndexMap<String, i64>,
}
