//! Active Enums
//!
//! Database enum types shared across entities.

use sea_orm::{entity::prelude::*, DeriveDisplay};
use serde::{Deserialize, Serialize};

/// Pull request lifecycle status.
///
/// Transitions are one-way: `OPEN` to `MERGED`. A merged pull request's
/// reviewer assignments are frozen.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "pull_request_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestStatus {
    /// Open for review; reviewers may be reassigned.
    #[sea_orm(string_value = "OPEN")]
    Open,
    /// Merged; terminal state.
    #[sea_orm(string_value = "MERGED")]
    Merged,
}
