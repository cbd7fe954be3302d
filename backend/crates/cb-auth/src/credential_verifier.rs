use crate::Result as AuthErrorResult;

use cb_core::User;

use async_trait::async_trait;

/// Strategy for turning a submitted email/password pair into a user.
///
/// Implementations only check credentials; binding a session is the caller's job.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify_credentials(&self, email: &str, password: &str) -> AuthErrorResult<User>;
}
