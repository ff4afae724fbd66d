use sea_orm_migration::{prelude::*, schema::*, sea_query::extension::postgres::Type};

use crate::m20250612_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create enum type first
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("pull_request_status"))
                    .values(["OPEN", "MERGED"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PullRequest::Table)
                    .if_not_exists()
                    .col(text(PullRequest::PullRequestId).primary_key())
                    .col(text(PullRequest::PullRequestName).not_null())
                    .col(text(PullRequest::AuthorId).not_null())
                    .col(
                        ColumnDef::new(PullRequest::Status)
                            .custom(Alias::new("pull_request_status"))
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone(PullRequest::CreatedAt).not_null())
                    .col(timestamp_with_time_zone_null(PullRequest::MergedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pull_request_author")
                            .from(PullRequest::Table, PullRequest::AuthorId)
                            .to(User::Table, User::UserId)
                            .on_update(ForeignKeyAction::NoAction)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pull_request_author")
                    .table(PullRequest::Table)
                    .col(PullRequest::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PullRequest::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("pull_request_status")).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PullRequest {
    Table,
    PullRequestId,
    PullRequestName,
    AuthorId,
    Status,
    CreatedAt,
    MergedAt,
}
