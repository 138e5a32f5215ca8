use crate::CourseRequest;

use ds_core::Term;

use clap::Parser;

/// Literal course argument that selects every course, as in `db-sync all`.
const ALL_COURSES: &str = "all";

#[derive(Parser, Debug)]
#[command(name = "db-sync")]
#[command(about = "Reconcile Submitty course databases with the master database")]
#[command(version)]
pub struct Cli {
    /// Courses to sync (or `all`)
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub courses: Vec<String>,

    /// Sync every course of the term
    #[arg(long)]
    pub all: bool,

    /// Term label such as f26 (defaults to the current term)
    #[arg(long)]
    pub term: Option<Term>,

    /// Sync the valid courses without asking when some names are unknown
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Resolve and partition only; write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print the JSON report (implies --json)
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn course_request(&self) -> CourseRequest {
        if self.all || matches!(self.courses.as_slice(), [only] if only == ALL_COURSES) {
            CourseRequest::All
        } else {
            CourseRequest::Named(self.courses.clone())
        }
    }

    pub fn term(&self) -> Term {
        self.term.unwrap_or_else(Term::current)
    }

    pub fn wants_json(&self) -> bool {
        self.json || self.pretty
    }
}
