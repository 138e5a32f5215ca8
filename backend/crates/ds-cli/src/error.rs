use ds_config::ConfigError;
use ds_core::Term;
use ds_db::DbError;
use ds_sync::BatchError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Batch aborted: {0}")]
    Batch(#[from] BatchError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("No valid courses specified (unknown for {term}: {})", .invalid.join(", "))]
    NoValidCourses { term: Term, invalid: Vec<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
