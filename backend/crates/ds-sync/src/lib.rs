//! Reconciles course databases against the master database for one term.
//!
//! A batch walks its courses strictly in order. Within a course the engine resolves both
//! identifier sets, partitions them, then runs reconcile (master wins on shared users),
//! forward (master-only users into the course) and reverse (course-only users into master,
//! with replication triggers suspended on the master session).

pub mod batch;
pub mod error;
pub mod options;
pub mod orchestrator;
pub mod outcome;
pub mod phase;
pub mod phases;
pub mod report;


pub use batch::BatchRunner;
pub use error::{BatchError, FailureKind, PRIVILEGE_HINT, SyncError, SyncResult};
pub use options::SyncOptions;
pub use orchestrator::GroupSyncOrchestrator;
pub use outcome::{GroupFailure, GroupOutcome, GroupProgress, GroupStatus, PlannedChanges, SyncStats};
pub use phase::SyncPhase;
pub use report::BatchReport;
