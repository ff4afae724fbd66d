//! # Common Test Utilities
//!
//! Shared infrastructure for integration tests: database setup, migration
//! bootstrap, and fixtures. Tests are skipped when `DATABASE_URL` is not
//! set so the suite stays green without a local Postgres.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Once,
};

use sea_orm::Database;
use server::AppState;

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Monotonic counter so fixtures created in the same millisecond stay unique
static UNIQUE: AtomicU64 = AtomicU64::new(0);

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Get a unique ID for this test run
pub fn unique_id() -> String {
    format!(
        "{}-{}",
        std::process::id(),
        UNIQUE.fetch_add(1, Ordering::Relaxed)
    )
}

/// Connect to the test database and run migrations.
///
/// Returns `None` when `DATABASE_URL` is not set; callers skip the test.
pub async fn test_state() -> Option<AppState> {
    init_test_env();

    let database_url = std::env::var("DATABASE_URL").ok()?;

    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    use migration::MigratorTrait as _;
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations on test database");

    Some(AppState {
        db,
    })
}

/// Fixture: a team with `member_count` members, all active, ids suffixed
/// with a unique run id. Returns (team_name, member user_ids in id order).
pub async fn create_team_fixture(state: &AppState, member_count: usize) -> (String, Vec<String>) {
    use server::dto::teams::{AddTeamRequest, TeamMemberDto};

    let run = unique_id();
    let team_name = format!("team-{}", run);
    let members: Vec<TeamMemberDto> = (1..=member_count)
        .map(|i| {
            TeamMemberDto {
                user_id:   format!("u{}-{}", i, run),
                username:  format!("User {}", i),
                is_active: true,
            }
        })
        .collect();
    let user_ids: Vec<String> = members.iter().map(|m| m.user_id.clone()).collect();

    let req = AddTeamRequest {
        team_name: team_name.clone(),
        members,
    };
    server::handlers::team::add_team_handler(state, req)
        .await
        .expect("Failed to create team fixture");

    (team_name, user_ids)
}
