//! # User Data Transfer Objects
//!
//! Request and response types for user endpoints, including the bulk
//! deactivation report.

use entity::{sea_orm_active_enums::PullRequestStatus, users};
use error::ErrorBody;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::pull_requests::ReassignResponse;

/// Request to toggle a user's active flag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct SetIsActiveRequest {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id:   String,
    pub is_active: bool,
}

/// Full user row as returned by the activation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id:   String,
    pub username:  String,
    pub team_name: String,
    pub is_active: bool,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            user_id:   user.user_id,
            username:  user.username,
            team_name: user.team_name,
            is_active: user.is_active,
        }
    }
}

/// Query parameters for the review listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetReviewQuery {
    pub user_id: String,
}

/// One pull request a user reviews.
///
/// All fields are null for a user with no review assignments: the listing
/// keeps LEFT JOIN semantics and emits a single placeholder row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewedPullRequest {
    pub pull_request_id:   Option<String>,
    pub pull_request_name: Option<String>,
    pub author_id:         Option<String>,
    pub status:            Option<PullRequestStatus>,
}

/// Response for the review listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReviewsResponse {
    pub user_id: String,
    pub members: Vec<ReviewedPullRequest>,
}

/// Request for bulk deactivation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeactivateManyRequest {
    /// User ids processed strictly in order
    pub users: Vec<String>,
}

/// Outcome of one attempted reassignment during deactivation: either the
/// reassignment payload or the error payload the reassign endpoint would
/// have returned.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReassignmentOutcome {
    Reassigned(ReassignResponse),
    Failed(ErrorBody),
}

/// Response for bulk deactivation, keyed by user id in request order
#[derive(Debug, Clone, Serialize)]
pub struct DeactivateManyResponse {
    pub reassignments: IndexMap<String, Vec<ReassignmentOutcome>>,
}
