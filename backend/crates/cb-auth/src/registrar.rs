use crate::{AuthError, PasswordHasher, Result as AuthErrorResult};

use cb_core::User;
use cb_db::{DbError, UserRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;

/// Creates accounts. Passwords are hashed before they reach storage.
pub struct Registrar {
    users: UserRepository,
    hasher: PasswordHasher,
}

impl Registrar {
    pub fn new(pool: SqlitePool, hasher: PasswordHasher) -> Self {
        Self {
            users: UserRepository::new(pool),
            hasher,
        }
    }

    /// Register a new user.
    ///
    /// Email uniqueness is enforced by the insert itself, so two concurrent
    /// registrations for one address cannot both succeed.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<User> {
        if password.is_empty() {
            return Err(AuthError::MissingPassword {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let digest = self.hasher.hash(password).await?;
        let user = User::new(name.to_string(), email.to_string(), digest);

        match self.users.create(&user).await {
            Ok(()) => {
                info!("Registered user {}", user.id);
                Ok(user)
            }
            Err(DbError::ConstraintViolation { ref message, .. })
                if message.contains("users.email") =>
            {
                Err(AuthError::EmailAlreadyInUse {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
