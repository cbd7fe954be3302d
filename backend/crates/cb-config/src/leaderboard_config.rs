use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_LEADERBOARD_SIZE: u32 = 1;
pub const MAX_LEADERBOARD_SIZE: u32 = 100;
pub const DEFAULT_LEADERBOARD_SIZE: u32 = 3;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Number of entries shown
    pub size: u32,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}

impl LeaderboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.size < MIN_LEADERBOARD_SIZE || self.size > MAX_LEADERBOARD_SIZE {
            return Err(ConfigError::config(format!(
                "leaderboard.size must be {}-{}, got {}",
                MIN_LEADERBOARD_SIZE, MAX_LEADERBOARD_SIZE, self.size
            )));
        }
        Ok(())
    }
}
