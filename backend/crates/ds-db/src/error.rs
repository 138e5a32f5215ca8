use ds_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

/// Postgres SQLSTATE for `insufficient_privilege`.
pub const SQLSTATE_INSUFFICIENT_PRIVILEGE: &str = "42501";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Failed to connect to database {database}: {source} {location}")]
    Connection {
        database: String,
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Insufficient privilege: {message} {location}")]
    InsufficientPrivilege {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row: {message} {location}")]
    InvalidRow {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn connection(database: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Connection {
            database: database.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn insufficient_privilege(message: impl Into<String>) -> Self {
        Self::InsufficientPrivilege {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Like `From<sqlx::Error>`, but splits out permission denials so callers can tell an
    /// operator to ask for a grant instead of debugging data.
    #[track_caller]
    pub fn classify(source: sqlx::Error) -> Self {
        if is_privilege_code(sql_state(&source).as_deref()) {
            return Self::insufficient_privilege(source.to_string());
        }

        Self::from(source)
    }

    pub fn is_insufficient_privilege(&self) -> bool {
        matches!(self, Self::InsufficientPrivilege { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        Self::InvalidRow {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub fn is_privilege_code(code: Option<&str>) -> bool {
    code == Some(SQLSTATE_INSUFFICIENT_PRIVILEGE)
}

fn sql_state(error: &sqlx::Error) -> Option<String> {
    match error {
        sqlx::Error::Database(db_error) => db_error.code().map(|code| code.into_owned()),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
