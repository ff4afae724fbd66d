use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250612_000001_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(text(User::UserId).primary_key())
                    .col(text(User::Username).not_null())
                    .col(text(User::TeamName).not_null())
                    .col(boolean(User::IsActive).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_team")
                            .from(User::Table, User::TeamName)
                            .to(Team::Table, Team::TeamName)
                            .on_update(ForeignKeyAction::NoAction)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Reviewer eligibility queries filter by team
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_team_name")
                    .table(User::Table)
                    .col(User::TeamName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    UserId,
    Username,
    TeamName,
    IsActive,
}
