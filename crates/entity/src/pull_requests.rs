//! Pull Requests Entity
//!
//! A proposed code change tracked with a review lifecycle. `merged_at` is
//! null until the pull request is merged.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::PullRequestStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "pull_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pull_request_id:   String,
    pub pull_request_name: String,
    pub author_id:         String,
    pub status:            PullRequestStatus,
    pub created_at:        chrono::DateTime<chrono::Utc>,
    pub merged_at:         Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::UserId",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Author,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Author.def() }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef { Relation::Assignments.def() }
}

impl ActiveModelBehavior for ActiveModel {}
