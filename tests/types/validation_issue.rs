use error_map::{ErrorKind, ErrorValue, ValidationIssue, VALIDATION_ERRORS_KEY};
use serde_json::json;

#[test]
fn issues_are_stored_in_context_and_read_back() {
    let issues = vec![
        ValidationIssue::new("too_short", "must be at least 8 characters", "user.password")
            .with_constraint("minLength"),
        ValidationIssue::new("invalid_format", "not an email", "user.email").with_value("bob@"),
    ];

    let err = ErrorValue::validation_with_issues("INVALID_INPUT", issues.clone());

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.validation_issues(), issues);
    assert_eq!(err.context().get(VALIDATION_ERRORS_KEY).and_then(|v| v.as_array()).map(Vec::len), Some(2));
}

#[test]
fn optional_issue_fields_are_omitted_on_the_wire() {
    let err = ErrorValue::validation_with_issues("X", [ValidationIssue::new("c", "m", "p")]);

    assert_eq!(
        err.context().get(VALIDATION_ERRORS_KEY),
        Some(&json!([{ "code": "c", "message": "m", "path": "p" }]))
    );
}

#[test]
fn errors_without_issues_read_as_empty() {
    assert!(ErrorValue::validation("X").validation_issues().is_empty());
}
