use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
    DEFAULT_DB_BUSY_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS, MAX_DB_MAX_CONNECTIONS,
    MIN_DB_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    /// Bound on concurrently outstanding queries
    pub max_connections: u32,
    /// Wait for a free pooled connection before failing the request
    pub acquire_timeout_secs: u64,
    /// Wait on a locked database file before failing the statement
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
            busy_timeout_secs: DEFAULT_DB_BUSY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Must stay inside the config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_DB_MAX_CONNECTIONS
            || self.max_connections > MAX_DB_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DB_MAX_CONNECTIONS, MAX_DB_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.acquire_timeout_secs == 0 {
            return Err(ConfigError::database(
                "database.acquire_timeout_secs must be at least 1",
            ));
        }

        Ok(())
    }
}
