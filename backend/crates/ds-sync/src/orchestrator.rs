use crate::phases::{propagate_forward, propagate_reverse, reconcile_records, resolve_identity_sets};
use crate::{GroupProgress, PlannedChanges, SyncOptions, SyncPhase, SyncResult};

use ds_core::{Term, partition};
use ds_db::{AuthoritativeStore, LocalStore};

use log::info;

/// Runs one course through resolve, reconcile, forward and reverse.
///
/// Phases with nothing to do are skipped. On error `progress` holds the failing phase and
/// the counts of everything already written.
pub struct GroupSyncOrchestrator<'a> {
    options: &'a SyncOptions,
}

impl<'a> GroupSyncOrchestrator<'a> {
    pub fn new(options: &'a SyncOptions) -> Self {
        Self { options }
    }

    pub async fn run<M, L>(
        &self,
        master: &mut M,
        local: &mut L,
        group: &str,
        term: Term,
        progress: &mut GroupProgress,
    ) -> SyncResult<()>
    where
        M: AuthoritativeStore,
        L: LocalStore,
    {
        progress.phase = SyncPhase::Resolving;
        let sets = resolve_identity_sets(master, local, group, term).await?;
        let split = partition(&sets.authoritative, &sets.local);

        let plan = PlannedChanges::from(&split);
        progress.plan = Some(plan);
        info!(
            "{}: {} shared, {} master only, {} course only",
            group, plan.common, plan.auth_only, plan.local_only
        );

        if self.options.dry_run {
            progress.phase = SyncPhase::Done;
            return Ok(());
        }

        if !split.common.is_empty() {
            progress.phase = SyncPhase::Reconciling;
            reconcile_records(master, local, group, term, &split.common, &mut progress.stats)
                .await?;
        }

        if !split.auth_only.is_empty() {
            progress.phase = SyncPhase::ForwardSyncing;
            propagate_forward(
                master,
                local,
                group,
                term,
                &split.auth_only,
                &self.options.password_placeholder,
                &mut progress.stats,
            )
            .await?;
        }

        if !split.local_only.is_empty() {
            progress.phase = SyncPhase::ReverseSyncing;
            propagate_reverse(master, local, group, term, &split.local_only, progress).await?;
        }

        progress.phase = SyncPhase::Done;
        Ok(())
    }
}
