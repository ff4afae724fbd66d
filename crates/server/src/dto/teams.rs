//! # Team Data Transfer Objects
//!
//! Request and response types for team endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A team member as submitted and returned by the team endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TeamMemberDto {
    /// User's unique identifier
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id:   String,
    /// Display name
    #[validate(length(min = 1, message = "username is required"))]
    pub username:  String,
    /// Whether the user is eligible for reviewer assignment
    pub is_active: bool,
}

/// Request to create a team with its members
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct AddTeamRequest {
    /// Team name, unique across the system
    #[validate(length(min = 1, message = "team_name is required"))]
    pub team_name: String,
    /// Members to insert or update
    #[validate(nested)]
    pub members:   Vec<TeamMemberDto>,
}

/// Query parameters for team lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetTeamQuery {
    pub team_name: String,
}

/// Response for a single team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    /// Team name
    pub team_name: String,
    /// Team members
    pub members:   Vec<TeamMemberDto>,
}
