//! Rule outputs: what the transformer produces once a rule fires.

use core::fmt;
use std::sync::Arc;

use crate::types::{ErrorContext, ErrorValue, NormalizedError, Thrown};

/// Handler behind [`Action::ThrowCustomError`].
///
/// Receives the normalized error and the call's context patch extended with
/// `transformerModuleName`.
pub type CustomHandler = Arc<dyn Fn(&NormalizedError, ErrorContext) -> Thrown + Send + Sync>;

/// Rule output.
#[derive(Clone)]
pub enum Action {
    /// Produce a copy of the template with the call's context merged in.
    ThrowErrorInstance(ErrorValue),
    /// Produce a bare code.
    ThrowString(String),
    /// Pass the normalized error through unchanged.
    ThrowOriginalError,
    /// Produce whatever the handler builds.
    ThrowCustomError(CustomHandler),
}

impl Action {
    /// Short label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThrowErrorInstance(_) => "throw_error_instance",
            Self::ThrowString(_) => "throw_string",
            Self::ThrowOriginalError => "pass",
            Self::ThrowCustomError(_) => "throw_custom_error",
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThrowErrorInstance(error) => f.debug_tuple("ThrowErrorInstance").field(&error.code()).finish(),
            Self::ThrowString(code) => f.debug_tuple("ThrowString").field(code).finish(),
            Self::ThrowOriginalError => f.write_str("ThrowOriginalError"),
            Self::ThrowCustomError(_) => f.write_str("ThrowCustomError(..)"),
        }
    }
}
