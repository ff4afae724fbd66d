//! # User Handlers

use axum::Json;
use error::{ErrorBody, Result};
use indexmap::IndexMap;
use validator::Validate;

use crate::{
    dto::users::{
        DeactivateManyRequest,
        DeactivateManyResponse,
        GetReviewQuery,
        ReassignmentOutcome,
        ReviewedPullRequest,
        SetIsActiveRequest,
        UserReviewsResponse,
        UserResponse,
    },
    policy,
    AppState,
};

/// Toggle a user's active flag.
///
/// An unknown user is reported as 400 with a NOT_FOUND code.
pub async fn set_is_active_handler(state: &AppState, req: SetIsActiveRequest) -> Result<Json<UserResponse>> {
    req.validate()?;

    let user = policy::users::set_user_active(&state.db, &req.user_id, req.is_active).await?;

    Ok(Json(user.into()))
}

/// List the pull requests a user reviews.
pub async fn get_review_handler(state: &AppState, query: GetReviewQuery) -> Result<Json<UserReviewsResponse>> {
    let rows = policy::users::get_user_reviews(&state.db, &query.user_id).await?;

    Ok(Json(UserReviewsResponse {
        user_id: query.user_id,
        members: rows
            .into_iter()
            .map(|row| {
                ReviewedPullRequest {
                    pull_request_id:   row.pull_request_id,
                    pull_request_name: row.pull_request_name,
                    author_id:         row.author_id,
                    status:            row.status,
                }
            })
            .collect(),
    }))
}

/// Deactivate users in order, reassigning their open review assignments
/// and reporting every outcome per user.
pub async fn deactivate_many_handler(
    state: &AppState,
    req: DeactivateManyRequest,
) -> Result<Json<DeactivateManyResponse>> {
    let results = policy::users::deactivate_users(&state.db, &req.users).await?;

    let reassignments: IndexMap<String, Vec<ReassignmentOutcome>> = results
        .into_iter()
        .map(|(user_id, outcomes)| {
            let outcomes = outcomes
                .into_iter()
                .map(|outcome| {
                    match outcome {
                        Ok(reassignment) => ReassignmentOutcome::Reassigned(reassignment.into()),
                        Err(err) => ReassignmentOutcome::Failed(ErrorBody::from(&err)),
                    }
                })
                .collect();
            (user_id, outcomes)
        })
        .collect();

    Ok(Json(DeactivateManyResponse {
        reassignments,
    }))
}
