//! db-sync - reconcile Submitty course databases with the master database
//!
//! ```bash
//! # Sync two courses for the current term
//! db-sync csci1100 csci1200
//!
//! # Preview every course of fall 2026 as JSON
//! db-sync --all --term f26 --dry-run --pretty
//! ```

use ds_cli::{Cli, CliError, ReportFormat, RunOutcome, logger, render, run};
use ds_config::Config;
use ds_sync::BatchReport;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting db-sync v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let format = if cli.pretty {
        ReportFormat::PrettyJson
    } else if cli.wants_json() {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    match run(&cli, &config).await {
        Ok(RunOutcome::Finished(report)) => {
            print_report(&report, format);
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Ok(RunOutcome::Declined) => {
            eprintln!("exiting...");
            ExitCode::SUCCESS
        }
        Err(CliError::Batch(batch_error)) => {
            print_report(batch_error.report(), format);
            error!("{}", batch_error);
            eprintln!("Error: {}", batch_error);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load, validate and start logging. Nothing touches a database before this succeeds.
fn load_config() -> Result<Config, CliError> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(parent) = log_file.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    Ok(config)
}

fn print_report(report: &BatchReport, format: ReportFormat) {
    match render(report, format) {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => eprintln!("Error rendering report: {}", e),
    }
}
