use crate::{SyncError, SyncResult};

use ds_core::Term;
use ds_db::{AuthoritativeStore, LocalStore};

use std::collections::BTreeSet;

use log::debug;

/// Identifier sets for one course, before partitioning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentitySets {
    pub authoritative: BTreeSet<String>,
    pub local: BTreeSet<String>,
}

pub async fn resolve_identity_sets<M, L>(
    master: &mut M,
    local: &mut L,
    group: &str,
    term: Term,
) -> SyncResult<IdentitySets>
where
    M: AuthoritativeStore,
    L: LocalStore,
{
    let authoritative = master
        .member_ids(group, term)
        .await
        .map_err(|source| SyncError::Resolution {
            group: group.to_string(),
            source,
        })?;

    let local_ids = local
        .user_ids()
        .await
        .map_err(|source| SyncError::Resolution {
            group: group.to_string(),
            source,
        })?;

    debug!(
        "{} {}: {} enrolled in master, {} in course database",
        term,
        group,
        authoritative.len(),
        local_ids.len()
    );

    Ok(IdentitySets {
        authoritative,
        local: local_ids,
    })
}
