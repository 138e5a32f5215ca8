use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Database
// =========================================================================

#[test]
#[serial]
fn given_port_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("DBSYNC_DB_PORT", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_blank_host_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _host = EnvGuard::set("DBSYNC_DB_HOST", "  ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_blank_user_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _user = EnvGuard::set("DBSYNC_DB_USER", "");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_master_database_with_quote_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _db = EnvGuard::set("DBSYNC_DB_MASTER_DATABASE", "submitty'; --");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_course_prefix_with_dash_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _prefix = EnvGuard::set("DBSYNC_DB_COURSE_PREFIX", "submitty-dev");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_custom_port_and_prefix_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("DBSYNC_DB_PORT", "6432");
    let _prefix = EnvGuard::set("DBSYNC_DB_COURSE_PREFIX", "submitty_dev");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}
