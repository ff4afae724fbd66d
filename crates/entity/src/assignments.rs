//! Assignments Entity
//!
//! Marks a user as an active reviewer of a pull request. Reassignment
//! deletes the old row before inserting the replacement.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pull_request_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub reviewer_id:     String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pull_requests::Entity",
        from = "Column::PullRequestId",
        to = "super::pull_requests::Column::PullRequestId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PullRequest,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ReviewerId",
        to = "super::users::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Reviewer,
}

impl Related<super::pull_requests::Entity> for Entity {
    fn to() -> RelationDef { Relation::PullRequest.def() }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reviewer.def() }
}

impl ActiveModelBehavior for ActiveModel {}
