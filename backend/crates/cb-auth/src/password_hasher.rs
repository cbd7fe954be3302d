use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// bcrypt with a fixed work factor.
///
/// Both operations are CPU bound, so they run on the blocking pool instead of
/// a runtime worker.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        match tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await {
            Ok(Ok(digest)) => Ok(digest),
            Ok(Err(e)) => Err(hashing_error(e.to_string())),
            Err(e) => Err(hashing_error(format!("hashing task did not complete: {}", e))),
        }
    }

    /// Constant-time comparison of `plaintext` against a stored digest
    pub async fn verify(&self, plaintext: &str, digest: &str) -> AuthErrorResult<bool> {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();

        match tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest)).await {
            Ok(Ok(matched)) => Ok(matched),
            Ok(Err(e)) => Err(hashing_error(e.to_string())),
            Err(e) => Err(hashing_error(format!("hashing task did not complete: {}", e))),
        }
    }
}

#[track_caller]
fn hashing_error(message: String) -> AuthError {
    AuthError::Hashing {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
