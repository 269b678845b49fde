use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRNAME, DatabaseConfig, LoggingConfig, MatcherConfig, RateLimitConfig,
    ServerConfig,
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
    pub matcher: MatcherConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FG_CONFIG_DIR env var, else use ./.facegate/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FG_* environment variable overrides
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

    /// Get the config directory.
    /// Priority: FG_CONFIG_DIR env var > ./.facegate/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.matcher.validate()?;
        self.rate_limit.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Path of the general log file, if one is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        self.in_log_dir(self.logging.file.as_deref())
    }

    /// Path of the audit log file, if one is configured
    pub fn audit_log_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        self.in_log_dir(self.logging.audit_file.as_deref())
    }

    fn in_log_dir(&self, filename: Option<&str>) -> ConfigErrorResult<Option<PathBuf>> {
        match filename {
            Some(name) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(name),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 ({})",
            if self.auth.jwt_secret.is_some() {
                "secret set"
            } else {
                "secret missing"
            }
        );
        info!("  matcher: threshold={}", self.matcher.threshold);
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  logging: {} (colored: {}, audit: {})",
            *self.logging.level,
            self.logging.colored,
            if self.logging.audit_file.is_some() {
                "file"
            } else {
                "discarded"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FG_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("FG_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("FG_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);

        // Matcher
        Self::apply_env_parse("FG_MATCHER_THRESHOLD", &mut self.matcher.threshold);

        // Rate limit
        Self::apply_env_parse(
            "FG_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "FG_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Logging
        Self::apply_env_parse("FG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FG_LOG_FILE", &mut self.logging.file);
        Self::apply_env_option_string("FG_LOG_AUDIT_FILE", &mut self.logging.audit_file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
