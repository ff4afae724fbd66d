//! # User Operations
//!
//! Activation toggles, review listings, and the bulk deactivation cascade.

use entity::{
    assignments,
    pull_requests,
    sea_orm_active_enums::PullRequestStatus,
    users,
    Assignments,
    Users,
};
use error::{AppError, Result};
use indexmap::IndexMap;
use sea_orm::{
    sea_query::{Alias, Expr},
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    DbErr,
    EntityTrait,
    FromQueryResult,
    JoinType,
    QueryFilter,
    QueryOrder,
    QuerySelect,
    RelationTrait,
    Set,
    TransactionTrait,
};
use tracing::info;

use super::{pull_requests::{reassign_reviewer, Reassignment}, write_failed};

/// One row of a user's review listing. All pull request fields are null for
/// a user with no assignments (LEFT JOIN placeholder row).
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ReviewRow {
    pub pull_request_id:   Option<String>,
    pub pull_request_name: Option<String>,
    pub author_id:         Option<String>,
    pub status:            Option<PullRequestStatus>,
}

/// Set a user's active flag, returning the updated row.
///
/// An unknown user, or an update that touches zero rows, is reported as
/// [`AppError::UnknownUser`], which the activation endpoint maps to 400.
pub async fn set_user_active<C>(db: &C, user_id: &str, is_active: bool) -> Result<users::Model>
where
    C: ConnectionTrait,
{
    let user = Users::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::unknown_user("user_id not found"))?;

    let mut active: users::ActiveModel = user.into();
    active.is_active = Set(is_active);
    let user = active.update(db).await.map_err(|err| {
        match err {
            DbErr::RecordNotUpdated => AppError::unknown_user("user_id not found"),
            other => write_failed(other, "Internal Server Error, unable to update user"),
        }
    })?;

    info!(user_id = %user.user_id, is_active = user.is_active, "User activation changed");

    Ok(user)
}

/// List the pull requests a user reviews, via LEFT JOINs from the user row.
///
/// Zero rows means the user does not exist. A user with no assignments
/// yields exactly one all-null placeholder row.
pub async fn get_user_reviews<C>(db: &C, user_id: &str) -> Result<Vec<ReviewRow>>
where
    C: ConnectionTrait,
{
    let rows = Users::find()
        .select_only()
        .column_as(pull_requests::Column::PullRequestId, "pull_request_id")
        .column_as(pull_requests::Column::PullRequestName, "pull_request_name")
        .column_as(pull_requests::Column::AuthorId, "author_id")
        // enum columns are only auto-cast in entity selects; cast by hand here
        .column_as(
            Expr::col((entity::PullRequests, pull_requests::Column::Status)).cast_as(Alias::new("text")),
            "status",
        )
        .join(JoinType::LeftJoin, users::Relation::Assignments.def())
        .join(JoinType::LeftJoin, assignments::Relation::PullRequest.def())
        .filter(users::Column::UserId.eq(user_id))
        .order_by_asc(pull_requests::Column::PullRequestId)
        .into_model::<ReviewRow>()
        .all(db)
        .await?;

    if rows.is_empty() {
        return Err(AppError::not_found("user_id not found"));
    }

    Ok(rows)
}

/// Deactivate users in order, reassigning each one's open review
/// assignments and recording every outcome.
///
/// The batch aborts with `NotFound` at the first unknown id; users already
/// processed in the same call stay deactivated (no compensation). Each
/// reassignment runs in its own transaction scope.
pub async fn deactivate_users<C>(
    db: &C,
    user_ids: &[String],
) -> Result<IndexMap<String, Vec<Result<Reassignment>>>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let mut reassignments = IndexMap::with_capacity(user_ids.len());

    for user_id in user_ids {
        let user = Users::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found("user_id not found"))?;

        let mut active: users::ActiveModel = user.into();
        active.is_active = Set(false);
        active
            .update(db)
            .await
            .map_err(|e| write_failed(e, "Internal Server Error, unable to deactivate user"))?;

        let open_assignments = Assignments::find()
            .join(JoinType::InnerJoin, assignments::Relation::PullRequest.def())
            .filter(assignments::Column::ReviewerId.eq(user_id))
            .filter(pull_requests::Column::Status.eq(PullRequestStatus::Open))
            .order_by_asc(assignments::Column::PullRequestId)
            .all(db)
            .await?;

        let mut outcomes = Vec::with_capacity(open_assignments.len());
        for assignment in &open_assignments {
            outcomes.push(reassign_reviewer(db, &assignment.pull_request_id, user_id).await);
        }

        info!(
            user_id = %user_id,
            open_reviews = open_assignments.len(),
            "User deactivated"
        );

        reassignments.insert(user_id.clone(), outcomes);
    }

    Ok(reassignments)
}
