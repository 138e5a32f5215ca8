use crate::AuthoritativeUser;
use crate::tests::models::{sample_identity, sample_membership};

use googletest::prelude::*;

#[test]
fn given_matching_identity_and_membership_when_paired_then_ok() {
    // Given
    let identity = sample_identity("aphacker");
    let membership = sample_membership("aphacker");

    // When
    let result = AuthoritativeUser::new(identity, membership);

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(result.unwrap().user_id(), eq("aphacker"));
}

#[test]
fn given_mismatched_user_ids_when_paired_then_validation_error() {
    // Given
    let identity = sample_identity("aphacker");
    let membership = sample_membership("bitdiddle");

    // When
    let result = AuthoritativeUser::new(identity, membership);

    // Then
    assert_that!(result, err(anything()));
}
