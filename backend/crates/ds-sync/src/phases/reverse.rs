use crate::{GroupProgress, PRIVILEGE_HINT, SyncError, SyncResult};

use ds_core::Term;
use ds_db::{AuthoritativeStore, LocalStore};

use std::collections::BTreeSet;

use log::{debug, error, info, warn};

/// Copy course-only users into master with replication triggers suspended.
///
/// Triggers are restored after the copy whatever its outcome. A failed restore wins over
/// any copy error, since the master session can no longer be trusted. `progress` tracks the
/// suspension and any half-inserted user so a deadline that drops this future mid-way still
/// leaves the runner enough to clean up and report.
pub async fn propagate_reverse<M, L>(
    master: &mut M,
    local: &mut L,
    group: &str,
    term: Term,
    user_ids: &BTreeSet<String>,
    progress: &mut GroupProgress,
) -> SyncResult<()>
where
    M: AuthoritativeStore,
    L: LocalStore,
{
    info!(
        "Reverse sync (master <-- {}): {} users",
        group,
        user_ids.len()
    );

    master.suspend_triggers().await.map_err(|source| {
        if source.is_insufficient_privilege() {
            warn!("Skipping reverse sync for {}: {}", group, source);
            warn!("{}", PRIVILEGE_HINT);
            SyncError::Privilege { source }
        } else {
            SyncError::reverse_sync(None, format!("could not suspend triggers: {}", source))
        }
    })?;
    progress.triggers_suspended = true;

    let copied = copy_to_master(master, local, group, term, user_ids, progress).await;

    if let Err(source) = master.restore_triggers().await {
        if let Err(ref e) = copied {
            error!("Reverse sync for {} had already failed: {}", group, e);
        }
        return Err(SyncError::TriggerRestore { source });
    }
    progress.triggers_suspended = false;

    copied
}

async fn copy_to_master<M, L>(
    master: &mut M,
    local: &mut L,
    group: &str,
    term: Term,
    user_ids: &BTreeSet<String>,
    progress: &mut GroupProgress,
) -> SyncResult<()>
where
    M: AuthoritativeStore,
    L: LocalStore,
{
    for user_id in user_ids {
        let failing = Some(user_id.as_str());

        let record = local
            .find_user(user_id)
            .await
            .map_err(|e| SyncError::reverse_sync(failing, e.to_string()))?
            .ok_or_else(|| SyncError::reverse_sync(failing, "row vanished from the course database"))?;

        let known = master
            .has_identity(user_id)
            .await
            .map_err(|e| SyncError::reverse_sync(failing, e.to_string()))?;

        if known {
            debug!("{}: identity already in master, adding membership only", user_id);
            master
                .insert_membership(&record.membership(group, term))
                .await
                .map_err(|e| SyncError::reverse_sync(failing, format!("membership insert: {}", e)))?;
        } else {
            // an interrupted identity insert may still have committed
            progress.pending_membership = Some(user_id.clone());

            if let Err(e) = master.insert_identity(&record.identity()).await {
                progress.pending_membership = None;
                return Err(SyncError::reverse_sync(failing, format!("identity insert: {}", e)));
            }

            if let Err(source) = master.insert_membership(&record.membership(group, term)).await {
                error!(
                    "{} now exists in master users without a {} {} membership",
                    user_id, term, group
                );
                progress.pending_membership = None;
                return Err(SyncError::dangling(user_id, source.to_string()));
            }
            progress.pending_membership = None;
        }

        debug!("{}: copied to master", user_id);
        progress.stats.reversed += 1;
    }

    Ok(())
}
