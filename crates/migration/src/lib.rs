//! # Database Migrations
//!
//! Sea-ORM migrations owning the Quorum schema: `team`, `user`,
//! `pull_request`, and `assignment`, plus the `pull_request_status` enum
//! type. Migrations are executed in the order they appear in
//! [`Migrator::migrations`].

pub use sea_orm_migration::prelude::*;

mod m20250612_000001_create_team_table;
mod m20250612_000002_create_user_table;
mod m20250612_000003_create_pull_request_table;
mod m20250612_000004_create_assignment_table;

/// The main migrator that coordinates all migration operations.
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_team_table::Migration),
            Box::new(m20250612_000002_create_user_table::Migration),
            Box::new(m20250612_000003_create_pull_request_table::Migration),
            Box::new(m20250612_000004_create_assignment_table::Migration),
        ]
    }
}

/// Database connection helper for CLI usage
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_count() {
        let migrations = Migrator::migrations();
        assert_eq!(migrations.len(), 4, "Expected one migration per table");
    }
}
