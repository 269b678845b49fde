mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod matcher_config;
mod rate_limit_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use matcher_config::MatcherConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "FG_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".facegate";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "facegate.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_MATCH_THRESHOLD: f64 = 0.4;
const MAX_MATCH_THRESHOLD: f64 = 2.0;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
