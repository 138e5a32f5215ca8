mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod sync_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use sync_config::SyncConfig;

const DEFAULT_CONFIG_DIR: &str = ".db-sync";
const CONFIG_DIR_ENV_VAR: &str = "DBSYNC_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "hsdbu";
const DEFAULT_MASTER_DATABASE: &str = "submitty";
const DEFAULT_COURSE_DATABASE_PREFIX: &str = "submitty";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Locked-account marker: never a valid password hash.
const DEFAULT_PASSWORD_PLACEHOLDER: &str = "!";
const DEFAULT_GROUP_TIMEOUT_SECS: u64 = 0;
const MAX_GROUP_TIMEOUT_SECS: u64 = 86_400;
