//! # Team Operations
//!
//! Team creation with member upsert, and team lookup.

use entity::{teams, users, Teams, Users};
use error::{AppError, Result};
use sea_orm::{
    sea_query::OnConflict,
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
};
use tracing::info;

use super::write_failed;
use crate::dto::teams::{AddTeamRequest, TeamMemberDto, TeamResponse};

/// Create a team and insert-or-update its members.
///
/// Fails with `TEAM_EXISTS` when the team name is taken. A member whose
/// `user_id` already exists is moved onto this team with the submitted
/// username and active flag. Team insert and member upserts are one
/// transaction.
pub async fn add_team<C>(db: &C, req: &AddTeamRequest) -> Result<TeamResponse>
where
    C: ConnectionTrait + TransactionTrait,
{
    if Teams::find_by_id(&req.team_name).one(db).await?.is_some() {
        return Err(AppError::team_exists("team_name already exists"));
    }

    let txn = db.begin().await?;

    teams::ActiveModel {
        team_name: Set(req.team_name.clone()),
    }
    .insert(&txn)
    .await
    .map_err(|e| write_failed(e, "Internal Server Error, unable to add team"))?;

    for member in &req.members {
        let member_model = users::ActiveModel {
            user_id:   Set(member.user_id.clone()),
            username:  Set(member.username.clone()),
            team_name: Set(req.team_name.clone()),
            is_active: Set(member.is_active),
        };
        Users::insert(member_model)
            .on_conflict(
                OnConflict::column(users::Column::UserId)
                    .update_columns([
                        users::Column::Username,
                        users::Column::TeamName,
                        users::Column::IsActive,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .map_err(|e| write_failed(e, "Internal Server Error, unable to add or update user"))?;
    }

    txn.commit().await?;

    info!(team_name = %req.team_name, members = req.members.len(), "Team created");

    Ok(TeamResponse {
        team_name: req.team_name.clone(),
        members:   req.members.clone(),
    })
}

/// Look up a team by name, returning its member list.
///
/// A team nobody belongs to is indistinguishable from a missing one: the
/// lookup joins through `user` rows and reports `NotFound` when none match.
pub async fn get_team<C>(db: &C, team_name: &str) -> Result<TeamResponse>
where
    C: ConnectionTrait,
{
    let members = Users::find()
        .filter(users::Column::TeamName.eq(team_name))
        .order_by_asc(users::Column::UserId)
        .all(db)
        .await?;

    if members.is_empty() {
        return Err(AppError::not_found("team_name not found"));
    }

    Ok(TeamResponse {
        team_name: team_name.to_string(),
        members:   members
            .into_iter()
            .map(|user| {
                TeamMemberDto {
                    user_id:   user.user_id,
                    username:  user.username,
                    is_active: user.is_active,
                }
            })
            .collect(),
    })
}
