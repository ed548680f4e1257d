use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum FootageUpload {
    Table,
    Id,
    UserId,
    FileName,
    FileSize,
    FileType,
    FilePath,
    Title,
    Description,
    UploadDate,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(FootageUpload::Table)
                .if_not_exists()
                .col(ColumnDef::new(FootageUpload::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(FootageUpload::UserId).uuid().not_null())
                .col(ColumnDef::new(FootageUpload::FileName).string().not_null())
                .col(ColumnDef::new(FootageUpload::FileSize).big_integer().not_null())
                .col(ColumnDef::new(FootageUpload::FileType).string().not_null())
                .col(ColumnDef::new(FootageUpload::FilePath).string().not_null())
                .col(ColumnDef::new(FootageUpload::Title).string().null())
                .col(ColumnDef::new(FootageUpload::Description).text().null())
                .col(ColumnDef::new(FootageUpload::UploadDate).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(FootageUpload::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_footage_upload_user")
                        .from(FootageUpload::Table, FootageUpload::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(FootageUpload::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
