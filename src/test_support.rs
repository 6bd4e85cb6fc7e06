use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::migrate::run_migrations;

pub const FIXTURE_MIGRATIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/migrations");

pub fn memory_options() -> ConnectOptions {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    // one connection, otherwise each pooled connection sees its own empty database
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    opt
}

/// In-memory SQLite database migrated with the fixture scripts.
pub async fn memory_db() -> DatabaseConnection {
    let db = Database::connect(memory_options()).await.unwrap();
    run_migrations(&db, FIXTURE_MIGRATIONS).await.unwrap();
    db
}
