use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_SESSION_TTL_SECS: u64 = 60;
pub const MAX_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 30;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60 * 24;

// bcrypt rejects anything outside 4..=31
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;
pub const DEFAULT_BCRYPT_COST: u32 = 12;

pub const DEFAULT_COOKIE_NAME: &str = "clickboard_session";
pub const DEFAULT_SESSION_PURGE_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Lifetime of a login session
    pub session_ttl_secs: u64,
    /// bcrypt work factor for new password digests
    pub bcrypt_cost: u32,
    pub cookie_name: String,
    /// Mark the session cookie `Secure` (HTTPS only)
    pub cookie_secure: bool,
    /// How often expired sessions are deleted (0 = never)
    pub session_purge_interval_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            cookie_secure: false,
            session_purge_interval_secs: DEFAULT_SESSION_PURGE_INTERVAL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.session_ttl_secs < MIN_SESSION_TTL_SECS
            || self.session_ttl_secs > MAX_SESSION_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_secs must be {}-{}, got {}",
                MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        if self.bcrypt_cost < MIN_BCRYPT_COST || self.bcrypt_cost > MAX_BCRYPT_COST {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        let valid_cookie_name = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_cookie_name {
            return Err(ConfigError::auth(format!(
                "auth.cookie_name must be non-empty [A-Za-z0-9_-], got '{}'",
                self.cookie_name
            )));
        }

        Ok(())
    }
}
