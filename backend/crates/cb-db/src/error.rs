use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// SQLite extended result code for `SQLITE_BUSY`
const SQLITE_BUSY: &str = "5";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Database connection lost: {message} {location}")]
    ConnectionLost {
        message: String,
        location: ErrorLocation,
    },

    #[error("Constraint violation: {message} {location}")]
    ConstraintViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database operation timed out: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Whether the caller may reasonably try the same operation again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectionLost { .. } | Self::Timeout { .. })
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match source {
            sqlx::Error::PoolTimedOut => Self::Timeout {
                message: "timed out waiting for a pooled connection".to_string(),
                location,
            },
            sqlx::Error::Io(_) | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => {
                Self::ConnectionLost {
                    message: source.to_string(),
                    location,
                }
            }
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some(SQLITE_BUSY) => {
                Self::Timeout {
                    message: db.message().to_string(),
                    location,
                }
            }
            sqlx::Error::Database(ref db)
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation() =>
            {
                Self::ConstraintViolation {
                    message: db.message().to_string(),
                    location,
                }
            }
            source => Self::Sqlx { source, location },
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
