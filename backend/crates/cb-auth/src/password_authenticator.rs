use crate::{AuthError, CredentialVerifier, PasswordHasher, Result as AuthErrorResult};

use cb_core::User;
use cb_db::UserRepository;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Verifies credentials against the bcrypt digests in the users table
pub struct PasswordAuthenticator {
    users: UserRepository,
    hasher: PasswordHasher,
}

impl PasswordAuthenticator {
    pub fn new(pool: SqlitePool, hasher: PasswordHasher) -> Self {
        Self {
            users: UserRepository::new(pool),
            hasher,
        }
    }

    /// Look up `email` exactly as given and check `password` against its digest.
    ///
    /// Checks run in a fixed order: unknown email, empty password, missing digest,
    /// then the digest comparison. The hash primitive never sees an empty password.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthErrorResult<User> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::NoSuchUser {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if password.is_empty() {
            return Err(AuthError::MissingPassword {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let Some(digest) = user.password_hash.as_deref() else {
            return Err(AuthError::CorruptAccount {
                user_id: user.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !self.hasher.verify(password, digest).await? {
            return Err(AuthError::WrongPassword {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(user)
    }
}

#[async_trait]
impl CredentialVerifier for PasswordAuthenticator {
    async fn verify_credentials(&self, email: &str, password: &str) -> AuthErrorResult<User> {
        self.authenticate(email, password).await
    }
}
