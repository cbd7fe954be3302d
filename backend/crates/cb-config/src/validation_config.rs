use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 200;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 50;

pub const MIN_EMAIL_LENGTH: usize = 3;
pub const MAX_EMAIL_LENGTH: usize = 320;
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 254;

pub const MIN_SCORE_LIMIT: i64 = 1;
pub const MAX_SCORE_LIMIT: i64 = 1_000_000_000;
pub const DEFAULT_MAX_SCORE: i64 = 100_000;

/// Input limits enforced at the HTTP edge
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum display name length, in characters
    pub max_name_length: usize,
    /// Maximum email length, in characters
    pub max_email_length: usize,
    /// Highest score a single game may report
    pub max_score: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            max_score: DEFAULT_MAX_SCORE,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if self.max_email_length < MIN_EMAIL_LENGTH || self.max_email_length > MAX_EMAIL_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_email_length must be {}-{}, got {}",
                MIN_EMAIL_LENGTH, MAX_EMAIL_LENGTH, self.max_email_length
            )));
        }

        if self.max_score < MIN_SCORE_LIMIT || self.max_score > MAX_SCORE_LIMIT {
            return Err(ConfigError::config(format!(
                "validation.max_score must be {}-{}, got {}",
                MIN_SCORE_LIMIT, MAX_SCORE_LIMIT, self.max_score
            )));
        }

        Ok(())
    }
}
