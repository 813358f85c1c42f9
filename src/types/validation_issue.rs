//! Internal shape of a single validation failure.
//!
//! Validation libraries report failures in their own formats; adapters map
//! those into a list of [`ValidationIssue`]s and attach it with
//! [`ErrorValue::validation_with_issues`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::error_context::ErrorContext;
use crate::types::error_value::ErrorValue;

/// Context key holding the serialized issue list.
pub const VALIDATION_ERRORS_KEY: &str = "validationErrors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: String,
    pub message: String,
    /// Dotted path of the offending field, e.g. `user.email`.
    pub path: String,
    /// Name of the violated constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ValidationIssue {
    pub fn new(code: impl Into<String>, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into(), path: path.into(), constraint: None, value: None }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl ErrorValue {
    /// Validation error carrying the individual issues in its context.
    pub fn validation_with_issues<I>(code: impl Into<String>, issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        let issues: Vec<Value> = issues
            .into_iter()
            .filter_map(|issue| serde_json::to_value(issue).ok())
            .collect();
        ErrorValue::validation(code)
            .with_context(ErrorContext::new().with(VALIDATION_ERRORS_KEY, Value::Array(issues)))
    }

    /// Issues stored by [`validation_with_issues`](Self::validation_with_issues).
    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        self.context
            .get(VALIDATION_ERRORS_KEY)
            .and_then(Value::as_array)
            .map(|issues| {
                issues
                    .iter()
                    .filter_map(|issue| serde_json::from_value(issue.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}
