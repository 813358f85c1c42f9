//! Canonicalization of arbitrary failure input.
//!
//! Whatever a failing operation produced ends up as a [`RawError`]. Before
//! any rule is evaluated it is normalized into a [`NormalizedError`], whose
//! properties are read through [`NormalizedError::property`].

use core::fmt;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::types::error_kind::ErrorKind;
use crate::types::error_value::ErrorValue;
use crate::types::thrown::Thrown;

/// Boxed, thread-safe error trait object.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

const GENERIC_NAME: &str = "Error";
const UNKNOWN_MESSAGE: &str = "Unknown error";

/// Untyped failure input, before normalization.
///
/// `From` covers strings, JSON values, [`ErrorValue`], `io::Error`,
/// `serde_json::Error` and boxed errors. Other error types go through
/// [`RawError::error`], or
/// [`ResultTransformExt::or_transform_err`](crate::traits::ResultTransformExt::or_transform_err)
/// on a `Result`.
#[derive(Debug)]
pub enum RawError {
    /// Any Rust error.
    Error(BoxError),
    /// A structured error value.
    Value(ErrorValue),
    /// Input that was normalized already.
    Normalized(NormalizedError),
    /// A bare message or code.
    Message(String),
    /// A plain JSON record (or JSON primitive).
    Object(Value),
    /// Nothing usable.
    Null,
}

impl RawError {
    /// Wraps any concrete error type.
    pub fn error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from(Box::new(error) as BoxError)
    }

    /// Canonicalizes the input; `None` when there is nothing to match on.
    pub fn normalize(self) -> Option<NormalizedError> {
        match self {
            Self::Error(error) => Some(NormalizedError::from_boxed(error)),
            Self::Value(value) => Some(NormalizedError::from_value(value)),
            Self::Normalized(normalized) => Some(normalized),
            Self::Message(message) => Some(NormalizedError::new(message)),
            Self::Object(Value::String(message)) => Some(NormalizedError::new(message)),
            Self::Object(Value::Object(fields)) => Some(NormalizedError::from_fields(fields)),
            Self::Object(value @ Value::Array(_)) => Some(NormalizedError::new(value.to_string())),
            Self::Object(_) | Self::Null => None,
        }
    }
}

impl From<BoxError> for RawError {
    fn from(error: BoxError) -> Self {
        match error.downcast::<ErrorValue>() {
            Ok(value) => Self::Value(*value),
            Err(error) => match error.downcast::<NormalizedError>() {
                Ok(normalized) => Self::Normalized(*normalized),
                Err(error) => Self::Error(error),
            },
        }
    }
}

impl From<ErrorValue> for RawError {
    fn from(value: ErrorValue) -> Self {
        Self::Value(value)
    }
}

impl From<NormalizedError> for RawError {
    fn from(normalized: NormalizedError) -> Self {
        Self::Normalized(normalized)
    }
}

impl From<String> for RawError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for RawError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<Value> for RawError {
    fn from(value: Value) -> Self {
        Self::Object(value)
    }
}

impl From<std::io::Error> for RawError {
    fn from(error: std::io::Error) -> Self {
        Self::error(error)
    }
}

impl From<serde_json::Error> for RawError {
    fn from(error: serde_json::Error) -> Self {
        Self::error(error)
    }
}

impl<T: Into<RawError>> From<Option<T>> for RawError {
    fn from(raw: Option<T>) -> Self {
        raw.map_or(Self::Null, Into::into)
    }
}

impl From<Thrown> for RawError {
    fn from(thrown: Thrown) -> Self {
        match thrown {
            Thrown::Error(value) => Self::Value(*value),
            Thrown::Code(code) => Self::Message(code),
            Thrown::Original(normalized) => Self::Normalized(normalized),
            Thrown::Custom(error) => Self::from(error),
        }
    }
}

/// Canonical error shape rules are matched against.
#[derive(Debug, Clone)]
pub struct NormalizedError {
    name: String,
    message: String,
    code: Option<String>,
    stack: Option<String>,
    kind: Option<ErrorKind>,
    fields: Map<String, Value>,
    source: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl NormalizedError {
    /// Generic error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            stack: Some(capture_stack(GENERIC_NAME, &message)),
            name: GENERIC_NAME.to_owned(),
            message,
            code: None,
            kind: None,
            fields: Map::new(),
            source: None,
        }
    }

    /// Stand-in cause used when the input could not be normalized.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_MESSAGE)
    }

    /// Normalizes a concrete Rust error, keeping it for type checks.
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let name = short_type_name::<E>();
        let message = error.to_string();
        Self {
            stack: Some(capture_stack(name, &message)),
            name: name.to_owned(),
            message,
            code: None,
            kind: None,
            fields: Map::new(),
            source: Some(Arc::new(error)),
        }
    }

    fn from_boxed(error: BoxError) -> Self {
        let message = error.to_string();
        Self {
            stack: Some(capture_stack(GENERIC_NAME, &message)),
            name: GENERIC_NAME.to_owned(),
            message,
            code: None,
            kind: None,
            fields: Map::new(),
            source: Some(Arc::from(error)),
        }
    }

    fn from_value(value: ErrorValue) -> Self {
        let fields = match value.to_json() {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        Self {
            name: value.name().to_owned(),
            message: value.message().to_owned(),
            code: Some(value.code().to_owned()),
            stack: Some(value.stack().to_owned()).filter(|stack| !stack.is_empty()),
            kind: Some(value.kind()),
            fields,
            source: Some(Arc::new(value)),
        }
    }

    fn from_fields(fields: Map<String, Value>) -> Self {
        let message = fields
            .get("message")
            .and_then(truthy_string)
            .or_else(|| fields.get("code").and_then(truthy_string))
            .unwrap_or_else(|| Value::Object(fields.clone()).to_string());
        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(GENERIC_NAME)
            .to_owned();
        let kind = ErrorKind::from_name(&name);
        let code = fields.get("code").and_then(truthy_string);
        let stack = fields
            .get("stack")
            .and_then(truthy_string)
            .or_else(|| Some(capture_stack(&name, &message)));

        Self { name, message, code, stack, kind, fields, source: None }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[inline]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Kind of the error when it was an [`ErrorValue`] (or named like one).
    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    /// Extra properties of a JSON record or serialized error value.
    #[inline]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Reads a property for matching.
    ///
    /// Built-in properties are `message`, `name`, `code` and `stack`; any
    /// other name is looked up in [`fields`](Self::fields). Falsy values
    /// (empty string, zero, `false`, `null`, absent) read as `None`.
    pub fn property(&self, name: &str) -> Option<String> {
        let value = match name {
            "message" => Some(self.message.clone()),
            "name" => Some(self.name.clone()),
            "code" => self.code.clone(),
            "stack" => self.stack.clone(),
            _ => self.fields.get(name).and_then(truthy_string),
        };
        value.filter(|value| !value.is_empty())
    }

    /// `true` when the wrapped source error is an `E`.
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.source.as_deref().is_some_and(|source| source.is::<E>())
    }

    /// Borrows the wrapped source error as an `E`.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.source.as_deref().and_then(|source| source.downcast_ref::<E>())
    }

    /// JSON shape stored under `originalError` in an error context.
    pub fn to_context_value(&self) -> Value {
        let mut record = Map::new();
        record.insert("name".into(), Value::String(self.name.clone()));
        record.insert("message".into(), Value::String(self.message.clone()));
        if let Some(code) = &self.code {
            record.insert("code".into(), Value::String(code.clone()));
        }
        if let Some(stack) = &self.stack {
            record.insert("stack".into(), Value::String(stack.clone()));
        }
        Value::Object(record)
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl Error for NormalizedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}

/// JavaScript-style truthiness rendered as a string.
fn truthy_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_owned()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn short_type_name<E>() -> &'static str {
    let full = core::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn capture_stack(name: &str, message: &str) -> String {
    let header = if message.is_empty() { name.to_owned() } else { format!("{}: {}", name, message) };
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => format!("{}\n{}", header, backtrace),
        _ => header,
    }
}
