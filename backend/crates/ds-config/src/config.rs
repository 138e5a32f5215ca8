use crate::{
    CONFIG_DIR_ENV_VAR, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, SyncConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub sync: SyncConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DBSYNC_CONFIG_DIR env var, else use ./.db-sync/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply DBSYNC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
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
    /// Priority: DBSYNC_CONFIG_DIR env var > ./.db-sync/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors before touching any database.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.logging.validate()?;
        self.sync.validate()?;

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  database: {}@{}:{} (master: {}, courses: {}_<term>_<course>)",
            self.database.user,
            self.database.host,
            self.database.port,
            self.database.master_database,
            self.database.course_database_prefix
        );
        info!(
            "  database password: {}",
            if self.database.password.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
        info!(
            "  sync: group timeout={}",
            match self.sync.group_timeout_secs {
                0 => "none".to_string(),
                secs => format!("{}s", secs),
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("DBSYNC_DB_HOST", &mut self.database.host);
        Self::apply_env_parse("DBSYNC_DB_PORT", &mut self.database.port);
        Self::apply_env_string("DBSYNC_DB_USER", &mut self.database.user);
        Self::apply_env_option_string("DBSYNC_DB_PASSWORD", &mut self.database.password);
        Self::apply_env_string(
            "DBSYNC_DB_MASTER_DATABASE",
            &mut self.database.master_database,
        );
        Self::apply_env_string(
            "DBSYNC_DB_COURSE_PREFIX",
            &mut self.database.course_database_prefix,
        );

        // Logging
        Self::apply_env_parse("DBSYNC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DBSYNC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DBSYNC_LOG_FILE", &mut self.logging.file);

        // Sync
        Self::apply_env_parse(
            "DBSYNC_GROUP_TIMEOUT_SECS",
            &mut self.sync.group_timeout_secs,
        );
        Self::apply_env_string(
            "DBSYNC_PASSWORD_PLACEHOLDER",
            &mut self.sync.password_placeholder,
        );
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

    /// Helper: Apply environment variable override for parseable values
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
