use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct DbService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DbService {
    /// Connects and brings the schema up to date. Postgres in production, SQLite in tests.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(uri.to_owned());
        opts.connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        info!("Connecting to database...");
        let database_connection = Database::connect(opts).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }
}
