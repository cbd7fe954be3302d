
use crate::PasswordHasher;

use cb_db::PoolSettings;

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// Lowest cost bcrypt accepts; keeps the suite fast
pub(crate) const TEST_BCRYPT_COST: u32 = 4;

pub(crate) fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_BCRYPT_COST)
}

pub(crate) async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    cb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// On-disk pool with several connections so concurrent writes really overlap.
/// Keep the `TempDir` alive for the duration of the test.
pub(crate) async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = PoolSettings {
        path: temp_dir.path().join("auth.db"),
        max_connections,
        acquire_timeout: Duration::from_secs(5),
        busy_timeout: Duration::from_secs(5),
    };

    let pool = cb_db::connect(&settings)
        .await
        .expect("Failed to open file pool");
    (temp_dir, pool)
}
