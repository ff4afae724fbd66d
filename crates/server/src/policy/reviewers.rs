//! # Reviewer Selection
//!
//! Eligibility queries behind automatic assignment and reassignment.
//! Selection is deterministic: candidates are ordered by `user_id`
//! ascending, so identical data always yields identical assignments.

use entity::{assignments, pull_requests, users, Assignments, Users};
use error::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

/// Maximum number of reviewers auto-assigned when a pull request is created.
pub const MAX_INITIAL_REVIEWERS: u64 = 2;

/// Select the reviewers to assign to a freshly created pull request:
/// active members of the author's team, excluding the author, lowest
/// `user_id` first, at most [`MAX_INITIAL_REVIEWERS`].
pub async fn select_initial_reviewers<C>(db: &C, author: &users::Model) -> Result<Vec<users::Model>>
where
    C: ConnectionTrait,
{
    let reviewers = Users::find()
        .filter(users::Column::TeamName.eq(&author.team_name))
        .filter(users::Column::UserId.ne(&author.user_id))
        .filter(users::Column::IsActive.eq(true))
        .order_by_asc(users::Column::UserId)
        .limit(MAX_INITIAL_REVIEWERS)
        .all(db)
        .await?;

    Ok(reviewers)
}

/// Find a replacement for an outgoing reviewer: an active user in the
/// outgoing reviewer's team who is not already assigned to the pull request
/// and is not its author. Lowest `user_id` wins; `None` when the team has
/// nobody eligible.
pub async fn find_reassignment_candidate<C>(
    db: &C,
    pull_request: &pull_requests::Model,
    outgoing: &users::Model,
) -> Result<Option<users::Model>>
where
    C: ConnectionTrait,
{
    let assigned = assigned_reviewer_ids(db, &pull_request.pull_request_id).await?;

    let candidate = Users::find()
        .filter(users::Column::TeamName.eq(&outgoing.team_name))
        .filter(users::Column::IsActive.eq(true))
        .filter(users::Column::UserId.is_not_in(assigned))
        .filter(users::Column::UserId.ne(&pull_request.author_id))
        .order_by_asc(users::Column::UserId)
        .one(db)
        .await?;

    Ok(candidate)
}

/// Reviewer ids currently assigned to a pull request, ordered by id.
pub async fn assigned_reviewer_ids<C>(db: &C, pull_request_id: &str) -> Result<Vec<String>>
where
    C: ConnectionTrait,
{
    let ids = Assignments::find()
        .filter(assignments::Column::PullRequestId.eq(pull_request_id))
        .order_by_asc(assignments::Column::ReviewerId)
        .all(db)
        .await?
        .into_iter()
        .map(|assignment| assignment.reviewer_id)
        .collect();

    Ok(ids)
}
