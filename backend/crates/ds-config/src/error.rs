use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A value that loaded but failed validation. `section` names the config table.
    #[error("Invalid {section} configuration: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::invalid("general", message)
    }

    #[track_caller]
    pub fn database(message: impl Into<String>) -> Self {
        Self::invalid("database", message)
    }

    #[track_caller]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::invalid("logging", message)
    }

    #[track_caller]
    pub fn sync(message: impl Into<String>) -> Self {
        Self::invalid("sync", message)
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
