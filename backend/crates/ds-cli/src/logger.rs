use crate::{CliError, CliResult};

use ds_config::LogLevel;

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Install the global logger.
///
/// Console output goes to stderr so stdout carries only the report. With `log_file` set,
/// records are appended there instead, uncolored.
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let level_filter: LevelFilter = log_level.into();

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    CliError::logger(format!(
                        "Failed to open log file {}: {}",
                        log_path.display(),
                        e
                    ))
                })?;

            plain_format(Dispatch::new()).chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {message}",
                        date = humantime::format_rfc3339_seconds(SystemTime::now()),
                        level = colors.color(record.level()),
                        message = message,
                    ))
                })
                .chain(std::io::stderr())
        }
        None => plain_format(Dispatch::new()).chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={}, file={}",
            log_level,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stderr", log_level),
    }

    Ok(())
}

fn plain_format(dispatch: Dispatch) -> Dispatch {
    dispatch.format(|out, message, record| {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{target}]",
            date = humantime::format_rfc3339_seconds(SystemTime::now()),
            level = record.level(),
            message = message,
            target = record.target(),
        ))
    })
}
