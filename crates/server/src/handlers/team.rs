//! # Team Handlers

use axum::{http::StatusCode, Json};
use error::Result;
use validator::Validate;

use crate::{
    dto::teams::{AddTeamRequest, GetTeamQuery, TeamResponse},
    policy,
    AppState,
};

/// Create a team with its members.
///
/// Returns 201 with the team as submitted; 400 `TEAM_EXISTS` when the team
/// name is taken.
pub async fn add_team_handler(state: &AppState, req: AddTeamRequest) -> Result<(StatusCode, Json<TeamResponse>)> {
    req.validate()?;

    let team = policy::teams::add_team(&state.db, &req).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// Fetch a team and its member list by name.
pub async fn get_team_handler(state: &AppState, query: GetTeamQuery) -> Result<Json<TeamResponse>> {
    let team = policy::teams::get_team(&state.db, &query.team_name).await?;

    Ok(Json(team))
}
