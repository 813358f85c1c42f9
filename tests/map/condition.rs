use std::io;

use error_map::map::{Condition, TypeCheck};
use error_map::{ErrorKind, ErrorValue, NormalizedError, RawError};
use regex::Regex;
use serde_json::json;

fn error(message: &str) -> NormalizedError {
    NormalizedError::new(message)
}

fn equals(message: &str) -> Condition {
    Condition::Equals { message: message.into(), property: None }
}

fn includes(parts: &[&str]) -> Condition {
    Condition::Includes { parts: parts.iter().map(|p| (*p).to_owned()).collect(), property: None }
}

#[test]
fn equals_is_exact_and_case_sensitive() {
    let condition = equals("User not found");

    assert!(condition.evaluate(&error("User not found"), "message"));
    assert!(!condition.evaluate(&error("user not found"), "message"));
    assert!(!condition.evaluate(&error("User not found!"), "message"));
}

#[test]
fn includes_requires_every_part_ignoring_case() {
    let condition = includes(&["timeout", "connection"]);

    assert!(condition.evaluate(&error("Connection TIMEOUT occurred"), "message"));
    assert!(!condition.evaluate(&error("Connection reset"), "message"));
    assert!(!condition.evaluate(&error("Request timeout"), "message"));
}

#[test]
fn includes_with_uppercase_parts() {
    let condition = includes(&["TimeOut"]);

    assert!(condition.evaluate(&error("gateway timeout"), "message"));
}

#[test]
fn matches_tests_the_raw_value() {
    let condition = Condition::Matches { regex: Regex::new(r"^User \d+ not found$").unwrap(), property: None };

    assert!(condition.evaluate(&error("User 42 not found"), "message"));
    assert!(!condition.evaluate(&error("User bob not found"), "message"));
}

#[test]
fn one_of_is_exact_membership() {
    let condition = Condition::OneOf { values: vec!["E_LOCKED".into(), "E_BUSY".into()], property: None };

    assert!(condition.evaluate(&error("E_BUSY"), "message"));
    assert!(!condition.evaluate(&error("e_busy"), "message"));
    assert!(!condition.evaluate(&error("E_BUSY_NOW"), "message"));
}

#[test]
fn property_override_reads_another_field() {
    let raw = RawError::from(json!({ "message": "locked", "code": "E_LOCKED" })).normalize().unwrap();
    let condition = equals("E_LOCKED").with_property("code");

    assert!(condition.evaluate(&raw, "message"));
    assert!(!equals("E_LOCKED").evaluate(&raw, "message"));
}

#[test]
fn global_property_is_used_without_override() {
    let raw = RawError::from(json!({ "message": "locked", "reason": "quota" })).normalize().unwrap();

    assert!(equals("quota").evaluate(&raw, "reason"));
    assert!(!equals("quota").evaluate(&raw, "message"));
}

#[test]
fn missing_or_falsy_values_never_match() {
    let raw = RawError::from(json!({ "message": "m", "flag": false, "count": 0 })).normalize().unwrap();
    let everything = Regex::new(".*").unwrap();

    for property in ["code", "flag", "count", "absent"] {
        assert!(!equals("").evaluate(&raw, property));
        assert!(!Condition::Matches { regex: everything.clone(), property: None }.evaluate(&raw, property));
        assert!(!includes(&[]).evaluate(&raw, property));
    }
}

#[test]
fn type_check_matches_wrapped_rust_errors() {
    let io_error = RawError::from(io::Error::other("disk")).normalize().unwrap();
    let check = Condition::InstanceOf(TypeCheck::of::<io::Error>());

    assert!(check.evaluate(&io_error, "message"));
    assert!(!check.evaluate(&error("disk"), "message"));
}

#[test]
fn kind_check_matches_error_values() {
    let not_found = RawError::from(ErrorValue::not_found("GONE")).normalize().unwrap();
    let conflict = RawError::from(ErrorValue::conflict("DUP")).normalize().unwrap();
    let check = Condition::InstanceOf(TypeCheck::Kind(ErrorKind::NotFound));

    assert!(check.evaluate(&not_found, "message"));
    assert!(!check.evaluate(&conflict, "message"));
}

#[test]
fn with_property_leaves_type_checks_alone() {
    let check = Condition::InstanceOf(TypeCheck::Kind(ErrorKind::Conflict)).with_property("code");

    assert_eq!(check.label(), "instance_of");
}
