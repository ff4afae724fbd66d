//! # Statistics
//!
//! Reviewer counts per pull request. Pull requests with no assignment rows
//! never appear in the grouped result; callers see them as absent rather
//! than zero.

use entity::{assignments, Assignments, PullRequests};
use error::{AppError, Result};
use sea_orm::{
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    FromQueryResult,
    QueryFilter,
    QueryOrder,
    QuerySelect,
};

/// Reviewer count for one pull request.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ReviewerCount {
    pub pull_request_id: String,
    pub count:           i64,
}

/// Count assigned reviewers, either for one pull request or for all.
///
/// With an id: `NotFound` when that pull request is unknown. Without: only
/// when no pull requests exist at all.
pub async fn reviewer_counts<C>(db: &C, pull_request_id: Option<&str>) -> Result<Vec<ReviewerCount>>
where
    C: ConnectionTrait,
{
    match pull_request_id {
        Some(id) => {
            if PullRequests::find_by_id(id).one(db).await?.is_none() {
                return Err(AppError::not_found("pull request not found"));
            }
        },
        None => {
            if PullRequests::find().one(db).await?.is_none() {
                return Err(AppError::not_found("pull request not found"));
            }
        },
    }

    let mut query = Assignments::find()
        .select_only()
        .column(assignments::Column::PullRequestId)
        .column_as(assignments::Column::ReviewerId.count(), "count")
        .group_by(assignments::Column::PullRequestId)
        .order_by_asc(assignments::Column::PullRequestId);

    if let Some(id) = pull_request_id {
        query = query.filter(assignments::Column::PullRequestId.eq(id));
    }

    let counts = query.into_model::<ReviewerCount>().all(db).await?;

    Ok(counts)
}
