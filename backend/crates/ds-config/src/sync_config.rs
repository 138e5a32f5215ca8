use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GROUP_TIMEOUT_SECS, DEFAULT_PASSWORD_PLACEHOLDER,
    MAX_GROUP_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Deadline for a single course in seconds (0 = no deadline)
    pub group_timeout_secs: u64,
    /// Written to the course-only `user_password` column on forward inserts
    pub password_placeholder: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            group_timeout_secs: DEFAULT_GROUP_TIMEOUT_SECS,
            password_placeholder: String::from(DEFAULT_PASSWORD_PLACEHOLDER),
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.group_timeout_secs > MAX_GROUP_TIMEOUT_SECS {
            return Err(ConfigError::sync(format!(
                "sync.group_timeout_secs must be 0-{}, got {}",
                MAX_GROUP_TIMEOUT_SECS, self.group_timeout_secs
            )));
        }

        if self.password_placeholder.is_empty() {
            return Err(ConfigError::sync("sync.password_placeholder must not be empty"));
        }

        Ok(())
    }

    pub fn group_timeout(&self) -> Option<Duration> {
        match self.group_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
