use crate::{
    BatchError, BatchReport, GroupOutcome, GroupProgress, GroupSyncOrchestrator, SyncError,
    SyncOptions, SyncResult,
};

use ds_core::Term;
use ds_db::{AuthoritativeStore, DbError, LocalStore, LocalStoreConnector};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{error, info, warn};

/// Why a batch had to stop early.
enum Halt {
    MasterUnavailable(DbError),
    TriggerRestore(DbError),
}

impl Halt {
    #[track_caller]
    fn into_batch_error(self, group: &str, report: BatchReport) -> BatchError {
        let location = ErrorLocation::from(Location::caller());
        let group = group.to_string();
        let report = Box::new(report);

        match self {
            Halt::MasterUnavailable(source) => BatchError::MasterUnavailable {
                group,
                report,
                source,
                location,
            },
            Halt::TriggerRestore(source) => BatchError::TriggerRestore {
                group,
                report,
                source,
                location,
            },
        }
    }
}

/// Syncs a list of courses one after another against a single master session.
pub struct BatchRunner<'a, M, C> {
    master: &'a mut M,
    connector: &'a C,
    term: Term,
    options: SyncOptions,
}

impl<'a, M, C> BatchRunner<'a, M, C>
where
    M: AuthoritativeStore,
    C: LocalStoreConnector,
{
    pub fn new(master: &'a mut M, connector: &'a C, term: Term, options: SyncOptions) -> Self {
        Self {
            master,
            connector,
            term,
            options,
        }
    }

    /// Sync `groups` in order. A failing course only ends up in its own outcome; the batch
    /// stops early only when the master session itself is no longer usable.
    pub async fn run(&mut self, groups: &[String]) -> Result<BatchReport, BatchError> {
        let mut report = BatchReport::new(self.term, self.options.dry_run);

        for group in groups {
            info!("Syncing {} {}", self.term, group);

            let mut progress = GroupProgress::default();
            let result = self.sync_one(group, &mut progress).await;

            match result {
                Ok(()) => {
                    info!("{}: done {:?}", group, progress.stats);
                    report.push(GroupOutcome::completed(group, &progress));
                }
                Err(e) => {
                    error!("{}: aborted during {}: {}", group, progress.phase, e);
                    report.push(GroupOutcome::aborted(group, &progress, &e));

                    let suspended = progress.triggers_suspended;
                    if let Err(halt) = self.check_master(group, e, suspended).await {
                        return Err(halt.into_batch_error(group, report));
                    }
                }
            }
        }

        info!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }

    async fn sync_one(&mut self, group: &str, progress: &mut GroupProgress) -> SyncResult<()> {
        let mut local = self
            .connector
            .connect(group, self.term)
            .await
            .map_err(|source| SyncError::Connection {
                group: group.to_string(),
                source,
            })?;

        let orchestrator = GroupSyncOrchestrator::new(&self.options);
        let run = orchestrator.run(&mut *self.master, &mut local, group, self.term, progress);

        let result = match self.options.group_timeout {
            Some(deadline) => match tokio::time::timeout(deadline, run).await {
                Ok(result) => result,
                Err(_) => Err(Self::interrupted(group, deadline, progress)),
            },
            None => run.await,
        };

        if let Err(e) = local.close().await {
            warn!("Could not close course database for {}: {}", group, e);
        }

        result
    }

    /// Failure for a course cut off by its deadline. A user caught between identity and
    /// membership insert is reported as a dangling record rather than a plain timeout.
    #[track_caller]
    fn interrupted(group: &str, deadline: Duration, progress: &mut GroupProgress) -> SyncError {
        match progress.pending_membership.take() {
            Some(user_id) => {
                error!(
                    "{}: deadline hit while inserting {} into master; check its membership",
                    group, user_id
                );
                SyncError::dangling(
                    &user_id,
                    format!(
                        "deadline of {}s hit before the membership insert finished",
                        deadline.as_secs()
                    ),
                )
            }
            None => SyncError::timeout(group, deadline),
        }
    }

    /// Decide whether the master session survived a course failure.
    async fn check_master(
        &mut self,
        group: &str,
        error: SyncError,
        triggers_suspended: bool,
    ) -> Result<(), Halt> {
        if let SyncError::TriggerRestore { source } = error {
            return Err(Halt::TriggerRestore(source));
        }

        // only a deadline can leave the flag set: it cut reverse sync off before its restore
        if triggers_suspended {
            self.master
                .restore_triggers()
                .await
                .map_err(Halt::TriggerRestore)?;
        }

        self.master.ping().await.map_err(|source| {
            error!("Master database unreachable after {}: {}", group, source);
            Halt::MasterUnavailable(source)
        })
    }
}
