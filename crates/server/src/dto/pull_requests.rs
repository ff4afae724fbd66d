//! # Pull Request Data Transfer Objects
//!
//! Request and response types for pull request endpoints.

use entity::sea_orm_active_enums::PullRequestStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::json_time;
use crate::policy::pull_requests::{PullRequestRecord, Reassignment};

/// Request to create a pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreatePullRequestRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id:   String,
    #[validate(length(min = 1, message = "pull_request_name is required"))]
    pub pull_request_name: String,
    #[validate(length(min = 1, message = "author_id is required"))]
    pub author_id:         String,
}

/// Request to merge a pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct MergePullRequestRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,
}

/// Request to replace an assigned reviewer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ReassignReviewerRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,
    #[validate(length(min = 1, message = "old_user_id is required"))]
    pub old_user_id:     String,
}

/// A pull request with its currently assigned reviewers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestResponse {
    pub pull_request_id:    String,
    pub pull_request_name:  String,
    pub author_id:          String,
    pub status:             PullRequestStatus,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt", serialize_with = "json_time::serialize")]
    pub created_at:         chrono::DateTime<chrono::Utc>,
    #[serde(rename = "mergedAt", serialize_with = "json_time::serialize_option")]
    pub merged_at:          Option<chrono::DateTime<chrono::Utc>>,
}

impl From<PullRequestRecord> for PullRequestResponse {
    fn from(record: PullRequestRecord) -> Self {
        let PullRequestRecord {
            pull_request,
            assigned_reviewers,
        } = record;
        Self {
            pull_request_id: pull_request.pull_request_id,
            pull_request_name: pull_request.pull_request_name,
            author_id: pull_request.author_id,
            status: pull_request.status,
            assigned_reviewers,
            created_at: pull_request.created_at,
            merged_at: pull_request.merged_at,
        }
    }
}

/// Envelope for endpoints returning a single pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestEnvelope {
    pub pr: PullRequestResponse,
}

impl From<PullRequestRecord> for PullRequestEnvelope {
    fn from(record: PullRequestRecord) -> Self {
        Self {
            pr: record.into(),
        }
    }
}

/// Response for a successful reviewer reassignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReassignResponse {
    pub pr:          PullRequestResponse,
    pub replaced_by: String,
}

impl From<Reassignment> for ReassignResponse {
    fn from(reassignment: Reassignment) -> Self {
        Self {
            pr:          reassignment.record.into(),
            replaced_by: reassignment.replaced_by,
        }
    }
}
