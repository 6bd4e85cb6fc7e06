use std::path::Path;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend};
use sqlx::migrate::{Migrate, MigrateError, Migrator};
use sqlx::Pool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Migrate(#[from] MigrateError),
    #[error("migrations are not supported on {0:?}")]
    UnsupportedBackend(DbBackend),
}

/// Runs every pending script found in `dir`. Returns `(old_version, new_version)`.
pub async fn run_migrations(
    db: &DatabaseConnection,
    dir: impl AsRef<Path>,
) -> Result<(i64, i64), MigrationError> {
    let migrator = Migrator::new(dir.as_ref()).await?;

    match db.get_database_backend() {
        DbBackend::Postgres => {
            let pool = db.get_postgres_connection_pool();
            let old_version = applied_version(pool).await?;
            migrator.run(pool).await?;
            Ok((old_version, applied_version(pool).await?))
        }
        DbBackend::Sqlite => {
            let pool = db.get_sqlite_connection_pool();
            let old_version = applied_version(pool).await?;
            migrator.run(pool).await?;
            Ok((old_version, applied_version(pool).await?))
        }
        backend => Err(MigrationError::UnsupportedBackend(backend)),
    }
}

async fn applied_version<DB>(pool: &Pool<DB>) -> Result<i64, MigrateError>
where
    DB: sqlx::Database,
    DB::Connection: Migrate,
{
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let applied = conn.list_applied_migrations().await?;
    Ok(applied.iter().map(|m| m.version).max().unwrap_or(0))
}
