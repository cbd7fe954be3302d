use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, DatabaseConfig, LeaderboardConfig, LoggingConfig, RateLimitConfig,
    ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub leaderboard: LeaderboardConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CB_CONFIG_DIR env var, else use ./.clickboard/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: CB_CONFIG_DIR env var > ./.clickboard/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate every section. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;
        self.leaderboard.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// `None` when logging to stdout
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };
        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        Ok(Some(log_dir.join(filename)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections, acquire timeout {}s)",
            self.database.path, self.database.max_connections, self.database.acquire_timeout_secs
        );
        info!(
            "  auth: session ttl={}s, bcrypt cost={}, cookie={}{}",
            self.auth.session_ttl_secs,
            self.auth.bcrypt_cost,
            self.auth.cookie_name,
            if self.auth.cookie_secure {
                " (secure)"
            } else {
                ""
            }
        );
        info!(
            "  rate_limit: {} logins/{}s per email",
            self.rate_limit.max_login_attempts, self.rate_limit.window_secs
        );
        info!("  leaderboard: top {}", self.leaderboard.size);
        info!(
            "  validation: name={}, email={}, score<={}",
            self.validation.max_name_length,
            self.validation.max_email_length,
            self.validation.max_score
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CB_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("CB_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "CB_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "CB_DATABASE_ACQUIRE_TIMEOUT_SECS",
            &mut self.database.acquire_timeout_secs,
        );
        Self::apply_env_parse(
            "CB_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Auth
        Self::apply_env_parse("CB_AUTH_SESSION_TTL_SECS", &mut self.auth.session_ttl_secs);
        Self::apply_env_parse("CB_AUTH_BCRYPT_COST", &mut self.auth.bcrypt_cost);
        Self::apply_env_string("CB_AUTH_COOKIE_NAME", &mut self.auth.cookie_name);
        Self::apply_env_bool("CB_AUTH_COOKIE_SECURE", &mut self.auth.cookie_secure);
        Self::apply_env_parse(
            "CB_AUTH_SESSION_PURGE_INTERVAL_SECS",
            &mut self.auth.session_purge_interval_secs,
        );

        // Rate limit
        Self::apply_env_parse(
            "CB_RATE_LIMIT_MAX_LOGIN_ATTEMPTS",
            &mut self.rate_limit.max_login_attempts,
        );
        Self::apply_env_parse(
            "CB_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Leaderboard
        Self::apply_env_parse("CB_LEADERBOARD_SIZE", &mut self.leaderboard.size);

        // Validation
        Self::apply_env_parse(
            "CB_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "CB_VALIDATION_MAX_EMAIL_LENGTH",
            &mut self.validation.max_email_length,
        );
        Self::apply_env_parse("CB_VALIDATION_MAX_SCORE", &mut self.validation.max_score);

        // Logging
        Self::apply_env_parse("CB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CB_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
