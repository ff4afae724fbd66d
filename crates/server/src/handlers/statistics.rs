//! # Statistics Handlers

use axum::Json;
use error::Result;
use indexmap::IndexMap;

use crate::{
    dto::statistics::{ReviewersAmountQuery, ReviewersAmountResponse},
    policy,
    AppState,
};

/// Count assigned reviewers per pull request.
///
/// With `pull_request_id` the result holds at most that one entry; without
/// it, one entry per pull request that has at least one assignment.
pub async fn reviewers_amount_handler(
    state: &AppState,
    query: ReviewersAmountQuery,
) -> Result<Json<ReviewersAmountResponse>> {
    let counts = policy::statistics::reviewer_counts(&state.db, query.pull_request_id.as_deref()).await?;

    let reviewers_amount: IndexMap<String, i64> = counts
        .into_iter()
        .map(|count| (count.pull_request_id, count.count))
        .collect();

    Ok(Json(ReviewersAmountResponse {
        reviewers_amount,
    }))
}
