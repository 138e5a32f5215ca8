use crate::{SyncError, SyncResult, SyncStats};

use ds_core::{LocalUserRecord, Term};
use ds_db::{AuthoritativeStore, LocalStore};

use std::collections::BTreeSet;

use log::{debug, info};

/// Insert course rows for users enrolled in master but missing from the course database.
pub async fn propagate_forward<M, L>(
    master: &mut M,
    local: &mut L,
    group: &str,
    term: Term,
    user_ids: &BTreeSet<String>,
    password_placeholder: &str,
    stats: &mut SyncStats,
) -> SyncResult<()>
where
    M: AuthoritativeStore,
    L: LocalStore,
{
    info!(
        "Forward sync (master --> {}): {} users",
        group,
        user_ids.len()
    );

    for user_id in user_ids {
        let user = master
            .find_member(user_id, group, term)
            .await
            .map_err(|e| SyncError::forward_sync(user_id, e.to_string()))?
            .ok_or_else(|| {
                SyncError::forward_sync(user_id, "no longer enrolled in the master database")
            })?;

        local
            .insert_user(
                &LocalUserRecord::from_authoritative(&user),
                password_placeholder,
            )
            .await
            .map_err(|e| SyncError::forward_sync(user_id, e.to_string()))?;

        debug!("{}: inserted into {}", user_id, group);
        stats.forwarded += 1;
    }

    Ok(())
}
