use crate::BatchReport;

use ds_db::DbError;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Printed alongside every privilege failure.
pub const PRIVILEGE_HINT: &str = "Permission errors indicate that a superuser role (or a grant \
     to SET session_replication_role) is needed for reverse sync. Ask a database administrator \
     for the grant; the regular application role is not supposed to be a superuser.";

/// Failure of one course. Converted into that course's outcome; never stops the batch on
/// its own except for [`SyncError::TriggerRestore`].
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Could not open course database for {group}: {source}")]
    Connection { group: String, source: DbError },

    #[error("Could not resolve user sets for {group}: {source}")]
    Resolution { group: String, source: DbError },

    #[error("Reconcile failed for user {user_id}: {message} {location}")]
    Reconcile {
        user_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Forward sync failed for user {user_id}: {message} {location}")]
    ForwardSync {
        user_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Insufficient privilege to suspend replication triggers: {source}")]
    Privilege { source: DbError },

    #[error("Reverse sync failed{}: {message} {location}", user_suffix(.user_id))]
    ReverseSync {
        user_id: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error(
        "Dangling master record for user {user_id}: identity inserted without membership: {reason} {location}"
    )]
    DanglingRecord {
        user_id: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Could not restore replication triggers on the master session: {source}")]
    TriggerRestore { source: DbError },

    #[error("Course {group} exceeded its deadline of {}s {location}", .deadline.as_secs())]
    Timeout {
        group: String,
        deadline: Duration,
        location: ErrorLocation,
    },
}

fn user_suffix(user_id: &Option<String>) -> String {
    match user_id {
        Some(id) => format!(" for user {}", id),
        None => String::new(),
    }
}

impl SyncError {
    #[track_caller]
    pub fn reconcile(user_id: &str, message: impl Into<String>) -> Self {
        Self::Reconcile {
            user_id: user_id.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forward_sync(user_id: &str, message: impl Into<String>) -> Self {
        Self::ForwardSync {
            user_id: user_id.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn reverse_sync(user_id: Option<&str>, message: impl Into<String>) -> Self {
        Self::ReverseSync {
            user_id: user_id.map(str::to_string),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dangling(user_id: &str, reason: impl Into<String>) -> Self {
        Self::DanglingRecord {
            user_id: user_id.to_string(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(group: &str, deadline: Duration) -> Self {
        Self::Timeout {
            group: group.to_string(),
            deadline,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Connection { .. } => FailureKind::Connection,
            Self::Resolution { .. } => FailureKind::Resolution,
            Self::Reconcile { .. } => FailureKind::Reconcile,
            Self::ForwardSync { .. } => FailureKind::ForwardSync,
            Self::Privilege { .. } => FailureKind::Privilege,
            Self::ReverseSync { .. } => FailureKind::ReverseSync,
            Self::DanglingRecord { .. } => FailureKind::DanglingRecord,
            Self::TriggerRestore { .. } => FailureKind::TriggerRestore,
            Self::Timeout { .. } => FailureKind::Timeout,
        }
    }

    /// The user being processed when the failure happened, if any.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Reconcile { user_id, .. }
            | Self::ForwardSync { user_id, .. }
            | Self::DanglingRecord { user_id, .. } => Some(user_id.as_str()),
            Self::ReverseSync { user_id, .. } => user_id.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Connection,
    Resolution,
    Reconcile,
    ForwardSync,
    Privilege,
    ReverseSync,
    DanglingRecord,
    TriggerRestore,
    Timeout,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Connection => "connection",
            Self::Resolution => "resolution",
            Self::Reconcile => "reconcile",
            Self::ForwardSync => "forward_sync",
            Self::Privilege => "privilege",
            Self::ReverseSync => "reverse_sync",
            Self::DanglingRecord => "dangling_record",
            Self::TriggerRestore => "trigger_restore",
            Self::Timeout => "timeout",
        }
    }

    /// Operator guidance for failures that are not data problems.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Privilege => Some(PRIVILEGE_HINT),
            _ => None,
        }
    }
}

/// Conditions that make the rest of the batch meaningless. Each carries the outcomes
/// collected up to and including the course that triggered it.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Master database unavailable after course {group}: {source} {location}")]
    MasterUnavailable {
        group: String,
        report: Box<BatchReport>,
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Replication triggers could not be restored after course {group}: {source} {location}")]
    TriggerRestore {
        group: String,
        report: Box<BatchReport>,
        source: DbError,
        location: ErrorLocation,
    },
}

impl BatchError {
    pub fn report(&self) -> &BatchReport {
        match self {
            Self::MasterUnavailable { report, .. } | Self::TriggerRestore { report, .. } => report,
        }
    }
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
