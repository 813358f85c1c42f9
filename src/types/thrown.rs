//! The value a transformation ends in.

use core::fmt;
use std::error::Error;

use crate::types::error_value::ErrorValue;
use crate::types::normalized::{BoxError, NormalizedError};

/// Status reported for failures that carry no status of their own.
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Outcome of [`ErrorTransformer::transform`](crate::ErrorTransformer::transform).
///
/// Every transformation produces exactly one of these: the matched rule's
/// error value or code, the original error passed through, whatever a custom
/// handler built, or the fallback error value.
#[derive(Debug)]
pub enum Thrown {
    Error(Box<ErrorValue>),
    Code(String),
    Original(NormalizedError),
    Custom(BoxError),
}

impl Thrown {
    /// Wraps an arbitrary error built by a custom handler.
    pub fn custom<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Custom(Box::new(error))
    }

    /// The error value, if this is one.
    pub fn as_error_value(&self) -> Option<&ErrorValue> {
        match self {
            Self::Error(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_error_value(self) -> Option<ErrorValue> {
        match self {
            Self::Error(value) => Some(*value),
            _ => None,
        }
    }

    /// The bare code, if this is one.
    pub fn as_code(&self) -> Option<&str> {
        match self {
            Self::Code(code) => Some(code),
            _ => None,
        }
    }

    pub fn as_original(&self) -> Option<&NormalizedError> {
        match self {
            Self::Original(original) => Some(original),
            _ => None,
        }
    }

    /// Machine-readable code suitable for a response body.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Error(value) => Some(value.code()),
            Self::Code(code) => Some(code),
            Self::Original(original) => original.code(),
            Self::Custom(error) => error.downcast_ref::<ErrorValue>().map(ErrorValue::code),
        }
    }

    /// HTTP status suitable for a response; 500 unless an error value says otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Error(value) => value.status_code(),
            Self::Original(original) => original
                .downcast_ref::<ErrorValue>()
                .map_or(DEFAULT_STATUS_CODE, ErrorValue::status_code),
            Self::Custom(error) => error
                .downcast_ref::<ErrorValue>()
                .map_or(DEFAULT_STATUS_CODE, ErrorValue::status_code),
            Self::Code(_) => DEFAULT_STATUS_CODE,
        }
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(value) => fmt::Display::fmt(value, f),
            Self::Code(code) => f.write_str(code),
            Self::Original(original) => fmt::Display::fmt(original, f),
            Self::Custom(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl Error for Thrown {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Error(value) => Some(value.as_ref()),
            Self::Original(original) => Some(original),
            Self::Custom(error) => Some(error.as_ref()),
            Self::Code(_) => None,
        }
    }
}

impl From<ErrorValue> for Thrown {
    fn from(value: ErrorValue) -> Self {
        Self::Error(Box::new(value))
    }
}

impl From<NormalizedError> for Thrown {
    fn from(original: NormalizedError) -> Self {
        Self::Original(original)
    }
}

impl From<String> for Thrown {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for Thrown {
    fn from(code: &str) -> Self {
        Self::Code(code.to_owned())
    }
}

impl From<BoxError> for Thrown {
    fn from(error: BoxError) -> Self {
        Self::Custom(error)
    }
}

impl PartialEq<&str> for Thrown {
    /// Compares a thrown bare code against a string.
    fn eq(&self, other: &&str) -> bool {
        self.as_code() == Some(*other)
    }
}
