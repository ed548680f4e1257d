use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum UserProfile {
    Table,
    Id,
    UserId,
    Bio,
    Location,
    Website,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(UserProfile::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserProfile::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(UserProfile::UserId).uuid().not_null().unique_key())
                .col(ColumnDef::new(UserProfile::Bio).text().null())
                .col(ColumnDef::new(UserProfile::Location).string().null())
                .col(ColumnDef::new(UserProfile::Website).string().null())
                .col(ColumnDef::new(UserProfile::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(UserProfile::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_profile_user")
                        .from(UserProfile::Table, UserProfile::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(UserProfile::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
