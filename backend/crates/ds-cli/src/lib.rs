//! Command-line front end: picks the courses, wires config into the stores and runs the
//! batch.

pub mod app;
pub mod cli;
pub mod error;
pub mod logger;
pub mod render;
pub mod selection;

#[cfg(test)]
mod tests;

pub use app::{RunOutcome, connection_settings, run, sync_options};
pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use render::{ReportFormat, render};
pub use selection::{CourseRequest, CourseSelection, confirm, select_courses};
