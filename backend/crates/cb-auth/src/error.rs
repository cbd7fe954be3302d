use cb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No user registered with that email {location}")]
    NoSuchUser { location: ErrorLocation },

    #[error("Password is missing {location}")]
    MissingPassword { location: ErrorLocation },

    #[error("Account {user_id} has no password hash {location}")]
    CorruptAccount {
        user_id: String,
        location: ErrorLocation,
    },

    #[error("Password does not match {location}")]
    WrongPassword { location: ErrorLocation },

    #[error("Email address is already registered {location}")]
    EmailAlreadyInUse { location: ErrorLocation },

    #[error("Rate limit exceeded: {limit} login attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for logs and API bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoSuchUser { .. } => "NO_SUCH_USER",
            Self::MissingPassword { .. } => "MISSING_PASSWORD",
            Self::CorruptAccount { .. } => "CORRUPT_ACCOUNT",
            Self::WrongPassword { .. } => "WRONG_PASSWORD",
            Self::EmailAlreadyInUse { .. } => "EMAIL_IN_USE",
            Self::RateLimitExceeded { .. } => "RATE_LIMITED",
            Self::Hashing { .. } => "HASHING_FAILED",
            Self::Storage { .. } => "STORAGE_ERROR",
        }
    }

    /// True for the four ways a login can be refused. Callers must not tell
    /// these apart in anything a client can observe.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            Self::NoSuchUser { .. }
                | Self::MissingPassword { .. }
                | Self::CorruptAccount { .. }
                | Self::WrongPassword { .. }
        )
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
