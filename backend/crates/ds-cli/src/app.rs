use crate::{
    Cli, CliError, CliResult, CourseRequest, confirm, select_courses,
};

use ds_config::{Config, DatabaseConfig};
use ds_core::Term;
use ds_db::{AuthoritativeStore, ConnectionSettings, PgCourseConnector, PgMasterStore};
use ds_sync::{BatchReport, BatchRunner, SyncOptions};

use log::{info, warn};

/// What happened to a run that did not fail outright.
pub enum RunOutcome {
    Finished(BatchReport),
    /// The operator declined to continue without the unknown courses.
    Declined,
}

pub fn connection_settings(database: &DatabaseConfig) -> ConnectionSettings {
    ConnectionSettings {
        host: database.host.clone(),
        port: database.port,
        username: database.user.clone(),
        password: database.password.clone(),
    }
}

pub fn sync_options(cli: &Cli, config: &Config) -> SyncOptions {
    SyncOptions {
        dry_run: cli.dry_run,
        password_placeholder: config.sync.password_placeholder.clone(),
        group_timeout: config.sync.group_timeout(),
    }
}

pub async fn run(cli: &Cli, config: &Config) -> CliResult<RunOutcome> {
    let term = cli.term();
    let settings = connection_settings(&config.database);

    info!(
        "Connecting to master database {}",
        config.database.master_database
    );
    let mut master = PgMasterStore::connect(&settings, &config.database.master_database).await?;

    let result = sync_courses(cli, config, &mut master, settings, term).await;

    if let Err(e) = master.close().await {
        warn!("Could not close master database connection: {}", e);
    }

    result
}

async fn sync_courses(
    cli: &Cli,
    config: &Config,
    master: &mut PgMasterStore,
    settings: ConnectionSettings,
    term: Term,
) -> CliResult<RunOutcome> {
    let available = master.list_groups(term).await?;
    let request = cli.course_request();
    let selection = select_courses(&request, &available);

    if !selection.invalid.is_empty() {
        if selection.valid.is_empty() {
            return Err(CliError::NoValidCourses {
                term,
                invalid: selection.invalid,
            });
        }

        warn!("Unknown courses for {}: {}", term, selection.invalid.join(", "));
        if !cli.yes && !confirm(&selection, std::io::stdin().lock(), std::io::stderr())? {
            return Ok(RunOutcome::Declined);
        }
    }

    if request == CourseRequest::All && selection.valid.is_empty() {
        warn!("Master database lists no courses for {}", term);
    }

    let connector = PgCourseConnector::new(settings, config.database.course_database_prefix.clone());
    let mut runner = BatchRunner::new(master, &connector, term, sync_options(cli, config));
    let report = runner.run(&selection.valid).await?;

    Ok(RunOutcome::Finished(report))
}
