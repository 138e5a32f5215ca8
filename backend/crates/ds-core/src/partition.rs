use std::collections::BTreeSet;

use serde::Serialize;

/// Three-way split of the master membership set against a course's local set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentityPartition {
    /// Present in both stores; master values overwrite the course row.
    pub common: BTreeSet<String>,
    /// Present only in the master database; copied down to the course.
    pub auth_only: BTreeSet<String>,
    /// Present only in the course database; copied up to the master.
    pub local_only: BTreeSet<String>,
}

pub fn partition(authoritative: &BTreeSet<String>, local: &BTreeSet<String>) -> IdentityPartition {
    IdentityPartition {
        common: authoritative.intersection(local).cloned().collect(),
        auth_only: authoritative.difference(local).cloned().collect(),
        local_only: local.difference(authoritative).cloned().collect(),
    }
}
