use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COURSE_DATABASE_PREFIX, DEFAULT_DB_HOST,
    DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_MASTER_DATABASE,
};

use serde::Deserialize;

/// Postgres server shared by the master and course databases.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// Optional; when absent libpq-style defaults (e.g. `PGPASSWORD`, `.pgpass`) apply.
    pub password: Option<String>,
    pub master_database: String,
    /// Course databases are named `{prefix}_{term}_{course}`
    pub course_database_prefix: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_DB_HOST),
            port: DEFAULT_DB_PORT,
            user: String::from(DEFAULT_DB_USER),
            password: None,
            master_database: String::from(DEFAULT_MASTER_DATABASE),
            course_database_prefix: String::from(DEFAULT_COURSE_DATABASE_PREFIX),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("master_database", &self.master_database)
            .field("course_database_prefix", &self.course_database_prefix)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::database("database.host must not be empty"));
        }

        if self.port == 0 {
            return Err(ConfigError::database("database.port must not be 0"));
        }

        if self.user.trim().is_empty() {
            return Err(ConfigError::database("database.user must not be empty"));
        }

        Self::validate_identifier("database.master_database", &self.master_database)?;
        Self::validate_identifier(
            "database.course_database_prefix",
            &self.course_database_prefix,
        )?;

        Ok(())
    }

    fn validate_identifier(field: &str, value: &str) -> ConfigErrorResult<()> {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::database(format!(
                "{} must be non-empty and contain only [A-Za-z0-9_], got '{}'",
                field, value
            )));
        }

        Ok(())
    }
}
