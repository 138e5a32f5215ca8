use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Log level parsing
// =========================================================================

#[test]
fn given_mixed_case_level_when_parsed_then_ok() {
    assert_that!(LogLevel::from_str("WARN").unwrap().0, eq(LevelFilter::Warn));
    assert_that!(LogLevel::from_str(" trace ").unwrap().0, eq(LevelFilter::Trace));
}

#[test]
fn given_unknown_level_when_parsed_then_error() {
    assert_that!(LogLevel::from_str("verbose"), err(anything()));
}

#[test]
#[serial]
fn given_invalid_env_level_when_load_then_default_kept() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("DBSYNC_LOG_LEVEL", "verbose");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Info));
}

// =========================================================================
// Validation Tests - Logging
// =========================================================================

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("DBSYNC_LOG_FILE", "../escape.log");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_plain_log_file_name_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("DBSYNC_LOG_FILE", "db-sync.log");
    let _colored = EnvGuard::set("DBSYNC_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.validate(), ok(anything()));
}
