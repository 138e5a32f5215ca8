use crate::{Cli, CourseRequest};

use ds_core::{Season, Term};

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_course_names_when_parsed_then_named_request_keeps_order() {
    // When
    let cli = Cli::try_parse_from(["db-sync", "csci1200", "csci1100"]).unwrap();

    // Then
    assert_that!(
        cli.course_request(),
        eq(&CourseRequest::Named(vec![
            "csci1200".to_string(),
            "csci1100".to_string()
        ]))
    );
}

#[test]
fn given_all_flag_or_literal_when_parsed_then_every_course_is_requested() {
    let flag = Cli::try_parse_from(["db-sync", "--all"]).unwrap();
    let literal = Cli::try_parse_from(["db-sync", "all"]).unwrap();

    assert_that!(flag.course_request(), eq(&CourseRequest::All));
    assert_that!(literal.course_request(), eq(&CourseRequest::All));
}

#[test]
fn given_no_courses_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["db-sync"]);

    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_courses_and_all_flag_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["db-sync", "--all", "csci1100"]);

    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_term_override_when_parsed_then_it_replaces_the_current_term() {
    // When
    let cli = Cli::try_parse_from(["db-sync", "--term", "s05", "csci1100"]).unwrap();

    // Then
    assert_that!(cli.term(), eq(Term::new(Season::Spring, 5).unwrap()));
}

#[test]
fn given_malformed_term_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["db-sync", "--term", "fall26", "csci1100"]);

    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_pretty_flag_when_parsed_then_json_is_implied() {
    let cli = Cli::try_parse_from(["db-sync", "--pretty", "--dry-run", "csci1100"]).unwrap();

    assert_that!(cli.wants_json(), eq(true));
    assert_that!(cli.dry_run, eq(true));
}
