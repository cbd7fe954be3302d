/// Login attempt quota, applied per email address
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Attempts allowed in a burst
    pub max_attempts: u32,
    /// Time for the full quota to replenish
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            window_secs: 60,
        }
    }
}
