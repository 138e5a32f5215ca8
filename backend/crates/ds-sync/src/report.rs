use crate::{GroupOutcome, GroupStatus};

use ds_core::Term;

use std::fmt;

use serde::Serialize;

/// Every course outcome of one run, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub term: Term,
    pub dry_run: bool,
    pub outcomes: Vec<GroupOutcome>,
}

impl BatchReport {
    pub fn new(term: Term, dry_run: bool) -> Self {
        Self {
            term,
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: GroupOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcome(&self, group: &str) -> Option<&GroupOutcome> {
        self.outcomes.iter().find(|o| o.group == group)
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Term {}{}: {} courses, {} succeeded, {} failed",
            self.term,
            if self.dry_run { " (dry run)" } else { "" },
            self.outcomes.len(),
            self.succeeded(),
            self.failed()
        )?;

        for outcome in &self.outcomes {
            write!(f, "  {:<16} {:<16}", outcome.group, outcome.phase.as_str())?;

            if self.dry_run {
                if let Some(plan) = outcome.plan {
                    write!(
                        f,
                        " would reconcile={} forward={} reverse={}",
                        plan.common, plan.auth_only, plan.local_only
                    )?;
                }
            } else {
                let stats = outcome.stats;
                write!(
                    f,
                    " reconciled={} unchanged={} forwarded={} reversed={}",
                    stats.reconciled, stats.unchanged, stats.forwarded, stats.reversed
                )?;
            }
            writeln!(f)?;

            if outcome.status == GroupStatus::Failure
                && let Some(ref failure) = outcome.failure
            {
                writeln!(f, "    FAILED [{}] {}", failure.kind.as_str(), failure.detail)?;
                if let Some(hint) = failure.kind.hint() {
                    writeln!(f, "    hint: {}", hint)?;
                }
            }
        }

        Ok(())
    }
}
