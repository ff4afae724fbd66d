//! # Pull Request Operations
//!
//! Creation, merge, and reviewer reassignment. Each multi-statement
//! operation runs in one transaction: commit on full success, rollback on
//! any failure.

use chrono::Utc;
use entity::{
    assignments,
    pull_requests,
    sea_orm_active_enums::PullRequestStatus,
    Assignments,
    PullRequests,
    Users,
};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use tracing::info;

use super::{
    reviewers::{assigned_reviewer_ids, find_reassignment_candidate, select_initial_reviewers},
    write_failed,
};

/// A pull request together with its currently assigned reviewer ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    pub pull_request:       pull_requests::Model,
    pub assigned_reviewers: Vec<String>,
}

/// Result of a successful reviewer reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    pub record:      PullRequestRecord,
    pub replaced_by: String,
}

/// Create a pull request and auto-assign up to two reviewers from the
/// author's team.
///
/// Fails with `NotFound` for an unknown author and `PR_EXISTS` for a
/// duplicate id. The insert and the assignment rows are one transaction.
pub async fn create_pull_request<C>(
    db: &C,
    pull_request_id: &str,
    pull_request_name: &str,
    author_id: &str,
) -> Result<PullRequestRecord>
where
    C: ConnectionTrait + TransactionTrait,
{
    // A user cannot exist without a team, so the author lookup also
    // guarantees a team to draw reviewers from.
    let author = Users::find_by_id(author_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("user_id not found"))?;

    if PullRequests::find_by_id(pull_request_id)
        .one(db)
        .await?
        .is_some()
    {
        return Err(AppError::pr_exists("PR id already exists"));
    }

    let txn = db.begin().await?;

    let pull_request = pull_requests::ActiveModel {
        pull_request_id:   Set(pull_request_id.to_string()),
        pull_request_name: Set(pull_request_name.to_string()),
        author_id:         Set(author_id.to_string()),
        status:            Set(PullRequestStatus::Open),
        created_at:        Set(Utc::now()),
        merged_at:         Set(None),
    }
    .insert(&txn)
    .await
    .map_err(|e| write_failed(e, "Internal Server Error, unable to create pull request"))?;

    let reviewers = select_initial_reviewers(&txn, &author).await?;
    let mut assigned_reviewers = Vec::with_capacity(reviewers.len());
    for reviewer in &reviewers {
        assignments::ActiveModel {
            pull_request_id: Set(pull_request_id.to_string()),
            reviewer_id:     Set(reviewer.user_id.clone()),
        }
        .insert(&txn)
        .await
        .map_err(|e| write_failed(e, "Internal Server Error, unable to assign reviewer to pull request"))?;
        assigned_reviewers.push(reviewer.user_id.clone());
    }

    txn.commit().await?;

    info!(
        pull_request_id = %pull_request.pull_request_id,
        author_id = %author.user_id,
        reviewers = assigned_reviewers.len(),
        "Pull request created"
    );

    Ok(PullRequestRecord {
        pull_request,
        assigned_reviewers,
    })
}

/// Merge a pull request, stamping `merged_at` with the current time.
///
/// Re-merging an already merged pull request is not rejected; the status
/// stays `MERGED` and `merged_at` is refreshed.
pub async fn merge_pull_request<C>(db: &C, pull_request_id: &str) -> Result<PullRequestRecord>
where
    C: ConnectionTrait,
{
    let pull_request = PullRequests::find_by_id(pull_request_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("pull_request_id not found"))?;

    let mut active: pull_requests::ActiveModel = pull_request.into();
    active.status = Set(PullRequestStatus::Merged);
    active.merged_at = Set(Some(Utc::now()));
    let pull_request = active
        .update(db)
        .await
        .map_err(|e| write_failed(e, "Internal Server Error, unable to change pull request status"))?;

    let assigned_reviewers = assigned_reviewer_ids(db, pull_request_id).await?;

    info!(pull_request_id = %pull_request.pull_request_id, "Pull request merged");

    Ok(PullRequestRecord {
        pull_request,
        assigned_reviewers,
    })
}

/// Replace an assigned reviewer with an eligible teammate.
///
/// The outgoing assignment is deleted and the replacement inserted inside
/// one transaction. Merged pull requests are frozen: the operation fails
/// with `PR_MERGED` before touching any assignment.
pub async fn reassign_reviewer<C>(db: &C, pull_request_id: &str, old_user_id: &str) -> Result<Reassignment>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let pull_request = PullRequests::find_by_id(pull_request_id).one(&txn).await?;
    let outgoing = Users::find_by_id(old_user_id).one(&txn).await?;
    let (pull_request, outgoing) = match (pull_request, outgoing) {
        (Some(pull_request), Some(outgoing)) => (pull_request, outgoing),
        _ => return Err(AppError::not_found("pull_request_id or user_id not found")),
    };

    if pull_request.status == PullRequestStatus::Merged {
        return Err(AppError::pr_merged("cannot reassign on merged PR"));
    }

    if Assignments::find_by_id((pull_request_id.to_string(), old_user_id.to_string()))
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(AppError::not_assigned("reviewer is not assigned to this PR"));
    }

    let candidate = find_reassignment_candidate(&txn, &pull_request, &outgoing)
        .await?
        .ok_or_else(|| AppError::no_candidate("no active replacement in team"))?;

    let deleted = Assignments::delete_many()
        .filter(assignments::Column::PullRequestId.eq(pull_request_id))
        .filter(assignments::Column::ReviewerId.eq(old_user_id))
        .exec(&txn)
        .await
        .map_err(|e| write_failed(e, "Internal Server Error, unable to unassign reviewer from pull request"))?;
    if deleted.rows_affected == 0 {
        return Err(AppError::server(
            "Internal Server Error, unable to unassign reviewer from pull request",
        ));
    }

    assignments::ActiveModel {
        pull_request_id: Set(pull_request_id.to_string()),
        reviewer_id:     Set(candidate.user_id.clone()),
    }
    .insert(&txn)
    .await
    .map_err(|e| write_failed(e, "Internal Server Error, unable to assign new reviewer to pull request"))?;

    let assigned_reviewers = assigned_reviewer_ids(&txn, pull_request_id).await?;

    txn.commit().await?;

    info!(
        pull_request_id = %pull_request.pull_request_id,
        old_user_id = %old_user_id,
        replaced_by = %candidate.user_id,
        "Reviewer reassigned"
    );

    Ok(Reassignment {
        record:      PullRequestRecord {
            pull_request,
            assigned_reviewers,
        },
        replaced_by: candidate.user_id,
    })
}
