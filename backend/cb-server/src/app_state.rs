use crate::api::extractors::session_cookie::CookieSettings;

use cb_auth::{
    CredentialVerifier, LoginRateLimiter, PasswordAuthenticator, PasswordHasher, RateLimitConfig,
    Registrar, SessionBinder,
};
use cb_config::{Config, ValidationConfig};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub registrar: Arc<Registrar>,
    pub sessions: Arc<SessionBinder>,
    pub login_limiter: LoginRateLimiter,
    pub cookie: CookieSettings,
    pub leaderboard_size: u32,
    pub validation: ValidationConfig,
}

impl AppState {
    /// Wire every component onto one pool handle
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let hasher = PasswordHasher::new(config.auth.bcrypt_cost);
        // Bounded to 30 days by AuthConfig::validate
        let session_ttl = chrono::Duration::seconds(config.auth.session_ttl_secs as i64);

        Self {
            verifier: Arc::new(PasswordAuthenticator::new(pool.clone(), hasher)),
            registrar: Arc::new(Registrar::new(pool.clone(), hasher)),
            sessions: Arc::new(SessionBinder::new(pool.clone(), session_ttl)),
            login_limiter: LoginRateLimiter::new(RateLimitConfig {
                max_attempts: config.rate_limit.max_login_attempts,
                window_secs: config.rate_limit.window_secs,
            }),
            cookie: CookieSettings {
                name: config.auth.cookie_name.clone(),
                secure: config.auth.cookie_secure,
                max_age_secs: config.auth.session_ttl_secs,
            },
            leaderboard_size: config.leaderboard.size,
            validation: config.validation.clone(),
            pool,
        }
    }
}
