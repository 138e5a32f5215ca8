use crate::{SyncError, SyncResult, SyncStats};

use ds_core::{LocalUserRecord, Term};
use ds_db::{AuthoritativeStore, LocalStore};

use std::collections::BTreeSet;

use log::{debug, info};

/// Overwrite course rows of shared users with master values. Master is only read.
pub async fn reconcile_records<M, L>(
    master: &mut M,
    local: &mut L,
    group: &str,
    term: Term,
    user_ids: &BTreeSet<String>,
    stats: &mut SyncStats,
) -> SyncResult<()>
where
    M: AuthoritativeStore,
    L: LocalStore,
{
    info!("Reconciling {} shared users in {}", user_ids.len(), group);

    for user_id in user_ids {
        let user = master
            .find_member(user_id, group, term)
            .await
            .map_err(|e| SyncError::reconcile(user_id, e.to_string()))?
            .ok_or_else(|| {
                SyncError::reconcile(user_id, "no longer enrolled in the master database")
            })?;
        let wanted = LocalUserRecord::from_authoritative(&user);

        let current = local
            .find_user(user_id)
            .await
            .map_err(|e| SyncError::reconcile(user_id, e.to_string()))?
            .ok_or_else(|| SyncError::reconcile(user_id, "row vanished from the course database"))?;

        if current == wanted {
            debug!("{}: up to date", user_id);
            stats.unchanged += 1;
            continue;
        }

        let touched = local
            .update_user(&wanted)
            .await
            .map_err(|e| SyncError::reconcile(user_id, e.to_string()))?;
        if touched == 0 {
            return Err(SyncError::reconcile(user_id, "update matched no course row"));
        }

        debug!("{}: updated from master", user_id);
        stats.reconciled += 1;
    }

    Ok(())
}
