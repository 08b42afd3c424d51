mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::{StorageBackend, StorageConfig};

pub const CONFIG_DIR_ENV: &str = "AM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".am";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_STORAGE_DIRECTORY: &str = "storage";
const DEFAULT_SEED_DEMO_ACCOUNTS: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
