use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_user_table::User;
use crate::m20250912_000001_create_footage_upload_table::FootageUpload;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Submission {
    Table,
    Id,
    UserId,
    Title,
    Kind,
    Content,
    FootageId,
    Status,
    Feedback,
    SubmittedAt,
    ReviewedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Submission::Table)
                .if_not_exists()
                .col(ColumnDef::new(Submission::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Submission::UserId).uuid().not_null())
                .col(ColumnDef::new(Submission::Title).string().not_null())
                .col(ColumnDef::new(Submission::Kind).string_len(32).not_null())
                .col(ColumnDef::new(Submission::Content).text().null())
                .col(ColumnDef::new(Submission::FootageId).uuid().null())
                .col(
                    ColumnDef::new(Submission::Status)
                        .string_len(16)
                        .not_null()
                        .default("under_review")
                )
                .col(ColumnDef::new(Submission::Feedback).text().null())
                .col(ColumnDef::new(Submission::SubmittedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Submission::ReviewedAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Submission::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_submission_user")
                        .from(Submission::Table, Submission::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_submission_footage")
                        .from(Submission::Table, Submission::FootageId)
                        .to(FootageUpload::Table, FootageUpload::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Submission::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
