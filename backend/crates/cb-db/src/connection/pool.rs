use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// How the shared connection pool is opened
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub path: PathBuf,
    /// Upper bound on concurrently checked-out connections
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing with `Timeout`
    pub acquire_timeout: Duration,
    pub busy_timeout: Duration,
}

/// Open the pool and bring the schema up to date.
///
/// The returned handle is the only way the rest of the process reaches the
/// database; close it with `SqlitePool::close` on shutdown.
pub async fn connect(settings: &PoolSettings) -> DbErrorResult<SqlitePool> {
    if let Some(parent) = settings.path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(&settings.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(settings.busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await?;

    info!(
        "Database pool opened: {} (max {} connections)",
        settings.path.display(),
        settings.max_connections
    );

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
