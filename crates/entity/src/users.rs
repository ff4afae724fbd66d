//! Users Entity
//!
//! A user belongs to exactly one team at any time. Only active users are
//! eligible for reviewer assignment.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id:   String,
    pub username:  String,
    pub team_name: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamName",
        to = "super::teams::Column::TeamName",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Team,
    #[sea_orm(has_many = "super::pull_requests::Entity")]
    AuthoredPullRequests,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef { Relation::Team.def() }
}

impl Related<super::pull_requests::Entity> for Entity {
    fn to() -> RelationDef { Relation::AuthoredPullRequests.def() }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef { Relation::Assignments.def() }
}

impl ActiveModelBehavior for ActiveModel {}
