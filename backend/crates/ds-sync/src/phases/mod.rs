//! The per-course phases, in the order the orchestrator runs them.
//!
//! Each phase walks its identifiers in sorted order and stops at the first failure; counts
//! in [`crate::SyncStats`] are bumped per user so partial work stays visible.

pub mod forward;
pub mod reconciler;
pub mod resolver;
pub mod reverse;

pub use forward::propagate_forward;
pub use reconciler::reconcile_records;
pub use resolver::{IdentitySets, resolve_identity_sets};
pub use reverse::propagate_reverse;
