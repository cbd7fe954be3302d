use crate::api::validation::{validate_email, validate_password, validate_score, validate_text};

use cb_config::ValidationConfig;

use googletest::prelude::*;

#[test]
fn given_blank_name_when_validating_then_error() {
    assert_that!(validate_text("   ", "name", 50), err(anything()));
}

#[test]
fn given_name_at_limit_when_validating_then_ok() {
    let name = "é".repeat(50);

    assert_that!(validate_text(&name, "name", 50), ok(anything()));
}

#[test]
fn given_name_over_limit_when_validating_then_error() {
    let name = "a".repeat(51);

    assert_that!(validate_text(&name, "name", 50), err(anything()));
}

#[test]
fn given_email_without_at_sign_when_validating_then_error() {
    let limits = ValidationConfig::default();

    assert_that!(validate_email("alice.example.com", &limits), err(anything()));
    assert_that!(validate_email("@example.com", &limits), err(anything()));
    assert_that!(validate_email("alice@", &limits), err(anything()));
}

#[test]
fn given_plain_email_when_validating_then_ok() {
    let limits = ValidationConfig::default();

    assert_that!(validate_email("a@x.com", &limits), ok(anything()));
}

#[test]
fn given_empty_password_when_validating_then_error() {
    assert_that!(validate_password(""), err(anything()));
    assert_that!(validate_password(" "), ok(anything()));
}

#[test]
fn given_score_in_range_when_validating_then_returns_score() {
    let limits = ValidationConfig::default();

    let score = validate_score(0, &limits).unwrap();

    assert_that!(score.value(), eq(0));
}

#[test]
fn given_negative_score_when_validating_then_error() {
    let limits = ValidationConfig::default();

    assert_that!(validate_score(-1, &limits), err(anything()));
}

#[test]
fn given_score_above_ceiling_when_validating_then_error() {
    let limits = ValidationConfig {
        max_score: 100,
        ..ValidationConfig::default()
    };

    assert_that!(validate_score(100, &limits), ok(anything()));
    assert_that!(validate_score(101, &limits), err(anything()));
}
