use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum EquipmentRequest {
    Table,
    Id,
    UserId,
    Equipment,
    Description,
    Status,
    Notes,
    DueDate,
    RequestDate,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(EquipmentRequest::Table)
                .if_not_exists()
                .col(ColumnDef::new(EquipmentRequest::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(EquipmentRequest::UserId).uuid().not_null())
                .col(ColumnDef::new(EquipmentRequest::Equipment).string().not_null())
                .col(ColumnDef::new(EquipmentRequest::Description).text().not_null())
                .col(
                    ColumnDef::new(EquipmentRequest::Status)
                        .string_len(16)
                        .not_null()
                        .default("pending")
                )
                .col(ColumnDef::new(EquipmentRequest::Notes).text().null())
                .col(ColumnDef::new(EquipmentRequest::DueDate).timestamp_with_time_zone().null())
                .col(ColumnDef::new(EquipmentRequest::RequestDate).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(EquipmentRequest::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_equipment_request_user")
                        .from(EquipmentRequest::Table, EquipmentRequest::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_equipment_request_user")
                .table(EquipmentRequest::Table)
                .col(EquipmentRequest::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(EquipmentRequest::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
