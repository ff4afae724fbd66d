use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250612_000002_create_user_table::User,
    m20250612_000003_create_pull_request_table::PullRequest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(text(Assignment::PullRequestId).not_null())
                    .col(text(Assignment::ReviewerId).not_null())
                    .primary_key(
                        Index::create()
                            .col(Assignment::PullRequestId)
                            .col(Assignment::ReviewerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_pull_request")
                            .from(Assignment::Table, Assignment::PullRequestId)
                            .to(PullRequest::Table, PullRequest::PullRequestId)
                            .on_update(ForeignKeyAction::NoAction)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_reviewer")
                            .from(Assignment::Table, Assignment::ReviewerId)
                            .to(User::Table, User::UserId)
                            .on_update(ForeignKeyAction::NoAction)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // getReview and deactivation scan assignments by reviewer
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignment_reviewer")
                    .table(Assignment::Table)
                    .col(Assignment::ReviewerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    PullRequestId,
    ReviewerId,
}
