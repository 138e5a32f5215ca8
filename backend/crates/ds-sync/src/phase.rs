use std::fmt;

use serde::Serialize;

/// Where a course's sync is, or where it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPhase {
    #[default]
    Connecting,
    Resolving,
    Reconciling,
    ForwardSyncing,
    ReverseSyncing,
    Done,
}

impl SyncPhase {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Connecting => "connecting",
            Self::Resolving => "resolving",
            Self::Reconciling => "reconciling",
            Self::ForwardSyncing => "forward_syncing",
            Self::ReverseSyncing => "reverse_syncing",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
