pub mod credential_verifier;
pub mod error;
pub mod login_rate_limiter;
pub mod password_authenticator;
pub mod password_hasher;
pub mod rate_limit_config;
pub mod registrar;
pub mod session_binder;
pub mod session_token;

pub use credential_verifier::CredentialVerifier;
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password_authenticator::PasswordAuthenticator;
pub use password_hasher::PasswordHasher;
pub use rate_limit_config::RateLimitConfig;
pub use registrar::Registrar;
pub use session_binder::SessionBinder;
pub use session_token::SessionToken;

#[cfg(test)]
mod tests;
