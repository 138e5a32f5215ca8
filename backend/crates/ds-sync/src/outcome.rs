use crate::{FailureKind, SyncError, SyncPhase};

use ds_core::IdentityPartition;

use serde::Serialize;

/// Rows written per phase. Counted as each user completes, so an aborted course still
/// reports what it finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncStats {
    /// Course rows overwritten with master values
    pub reconciled: usize,
    /// Shared users whose course row already matched
    pub unchanged: usize,
    /// Course rows inserted from the master database
    pub forwarded: usize,
    /// Master rows inserted from the course database
    pub reversed: usize,
}

/// Partition sizes found during resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlannedChanges {
    pub common: usize,
    pub auth_only: usize,
    pub local_only: usize,
}

impl From<&IdentityPartition> for PlannedChanges {
    fn from(partition: &IdentityPartition) -> Self {
        Self {
            common: partition.common.len(),
            auth_only: partition.auth_only.len(),
            local_only: partition.local_only.len(),
        }
    }
}

/// Mutable state of one course while it is being synced.
///
/// Survives a course being cut off by its deadline, so the runner can tell what was left
/// half done on the master session.
#[derive(Debug, Clone, Default)]
pub struct GroupProgress {
    pub phase: SyncPhase,
    pub plan: Option<PlannedChanges>,
    pub stats: SyncStats,
    /// Set between a successful trigger suspension and its restore.
    pub triggers_suspended: bool,
    /// User whose fresh master identity does not have its membership yet.
    pub pending_membership: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupFailure {
    pub kind: FailureKind,
    pub user_id: Option<String>,
    pub detail: String,
}

impl From<&SyncError> for GroupFailure {
    fn from(error: &SyncError) -> Self {
        Self {
            kind: error.kind(),
            user_id: error.user_id().map(str::to_string),
            detail: error.to_string(),
        }
    }
}

/// Final record for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOutcome {
    pub group: String,
    /// `done` on success, otherwise the phase that failed
    pub phase: SyncPhase,
    pub status: GroupStatus,
    pub plan: Option<PlannedChanges>,
    pub stats: SyncStats,
    pub failure: Option<GroupFailure>,
}

impl GroupOutcome {
    pub fn completed(group: &str, progress: &GroupProgress) -> Self {
        Self {
            group: group.to_string(),
            phase: progress.phase,
            status: GroupStatus::Success,
            plan: progress.plan,
            stats: progress.stats,
            failure: None,
        }
    }

    pub fn aborted(group: &str, progress: &GroupProgress, error: &SyncError) -> Self {
        Self {
            group: group.to_string(),
            phase: progress.phase,
            status: GroupStatus::Failure,
            plan: progress.plan,
            stats: progress.stats,
            failure: Some(GroupFailure::from(error)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GroupStatus::Success
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(|f| f.kind)
    }
}
