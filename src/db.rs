use log::info;
use sea_orm::{Database, DatabaseConnection, DbErr};
use thiserror::Error;

use crate::config::AppConfig;
use crate::migrate::{run_migrations, MigrationError};

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("db connect failed: {0}")]
    Connect(#[from] DbErr),
    #[error("db migration failed: {0}")]
    Migrate(#[from] MigrationError),
}

/// Opens the database and brings its schema up to date.
pub async fn connect_db(config: &AppConfig) -> Result<DatabaseConnection, ConnectError> {
    let db = Database::connect(config.database_url()).await?;
    let (old_version, new_version) = run_migrations(&db, &config.migrations_dir).await?;
    if new_version != old_version {
        info!("migrated from version {} to {}", old_version, new_version);
    } else {
        info!("version is {}", old_version);
    }
    Ok(db)
}
