use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Show {
    Table,
    Id,
    Title,
    AirTime,
    HostId,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Show::Table)
                .if_not_exists()
                .col(ColumnDef::new(Show::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Show::Title).string().not_null())
                .col(ColumnDef::new(Show::AirTime).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Show::HostId).uuid().null())
                .col(ColumnDef::new(Show::Description).text().null())
                .col(ColumnDef::new(Show::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Show::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_show_host")
                        .from(Show::Table, Show::HostId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_show_air_time")
                .table(Show::Table)
                .col(Show::AirTime)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Show::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
