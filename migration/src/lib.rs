pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_user_profile_table;
mod m20250905_000001_create_equipment_request_table;
mod m20250912_000001_create_footage_upload_table;
mod m20250920_000001_create_submission_table;
mod m20251001_000001_create_show_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_user_profile_table::Migration),
            Box::new(m20250905_000001_create_equipment_request_table::Migration),
            Box::new(m20250912_000001_create_footage_upload_table::Migration),
            Box::new(m20250920_000001_create_submission_table::Migration),
            Box::new(m20251001_000001_create_show_table::Migration),
        ]
    }
}
