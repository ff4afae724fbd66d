//! # Pull Request Handlers

use axum::Json;
use error::Result;
use validator::Validate;

use crate::{
    dto::pull_requests::{
        CreatePullRequestRequest,
        MergePullRequestRequest,
        PullRequestEnvelope,
        ReassignResponse,
        ReassignReviewerRequest,
    },
    policy,
    AppState,
};

/// Create a pull request, auto-assigning up to two reviewers from the
/// author's team.
pub async fn create_pull_request_handler(
    state: &AppState,
    req: CreatePullRequestRequest,
) -> Result<Json<PullRequestEnvelope>> {
    req.validate()?;

    let record = policy::pull_requests::create_pull_request(
        &state.db,
        &req.pull_request_id,
        &req.pull_request_name,
        &req.author_id,
    )
    .await?;

    Ok(Json(record.into()))
}

/// Merge a pull request.
pub async fn merge_pull_request_handler(
    state: &AppState,
    req: MergePullRequestRequest,
) -> Result<Json<PullRequestEnvelope>> {
    req.validate()?;

    let record = policy::pull_requests::merge_pull_request(&state.db, &req.pull_request_id).await?;

    Ok(Json(record.into()))
}

/// Replace an assigned reviewer with an eligible teammate.
pub async fn reassign_reviewer_handler(
    state: &AppState,
    req: ReassignReviewerRequest,
) -> Result<Json<ReassignResponse>> {
    req.validate()?;

    let reassignment =
        policy::pull_requests::reassign_reviewer(&state.db, &req.pull_request_id, &req.old_user_id).await?;

    Ok(Json(reassignment.into()))
}
