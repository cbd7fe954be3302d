use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_LOGIN_ATTEMPTS: u32 = 1;
pub const MAX_LOGIN_ATTEMPTS: u32 = 1000;
pub const DEFAULT_LOGIN_ATTEMPTS: u32 = 10;

pub const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Login throttling, applied per email address
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_login_attempts: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_login_attempts: DEFAULT_LOGIN_ATTEMPTS,
            window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_login_attempts < MIN_LOGIN_ATTEMPTS
            || self.max_login_attempts > MAX_LOGIN_ATTEMPTS
        {
            return Err(ConfigError::config(format!(
                "rate_limit.max_login_attempts must be {}-{}, got {}",
                MIN_LOGIN_ATTEMPTS, MAX_LOGIN_ATTEMPTS, self.max_login_attempts
            )));
        }

        if self.window_secs < MIN_RATE_LIMIT_WINDOW_SECS
            || self.window_secs > MAX_RATE_LIMIT_WINDOW_SECS
        {
            return Err(ConfigError::config(format!(
                "rate_limit.window_secs must be {}-{}, got {}",
                MIN_RATE_LIMIT_WINDOW_SECS, MAX_RATE_LIMIT_WINDOW_SECS, self.window_secs
            )));
        }

        Ok(())
    }
}
