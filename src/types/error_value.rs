//! The structured failure record every transformation ends in.
//!
//! An [`ErrorValue`] is fixed at construction except for four mutations:
//! context merge, timestamp refresh, trace id and layer. It serializes to a
//! flat camelCase JSON record and can be rebuilt from that record verbatim.

use core::fmt;
use std::backtrace::{Backtrace, BacktraceStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::traits::IntoErrorContext;
use crate::types::error_context::{ErrorContext, LAYER_KEY};
use crate::types::error_kind::{ErrorCategory, ErrorKind};

/// Environment variable read for [`ErrorValue::service_name`].
pub const SERVICE_NAME_ENV: &str = "SERVICE_NAME";

const UNKNOWN_SERVICE: &str = "unknown";

/// Construction input shared by every kind.
///
/// `status_code` is honoured only by kinds that classify upstream failures
/// ([`ErrorKind::ExternalService`] and [`ErrorKind::Network`]); every other
/// kind keeps its fixed status.
#[derive(Debug, Clone, Default)]
pub struct ErrorFields {
    pub code: String,
    pub message: Option<String>,
    pub trace_id: Option<String>,
    pub status_code: Option<u16>,
    pub context: Option<ErrorContext>,
    pub stack: Option<String>,
}

impl ErrorFields {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), ..Default::default() }
    }
}

/// Richly attributed failure record.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorValue {
    pub(crate) name: ErrorKind,
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) message: String,
    pub(crate) status_code: u16,
    pub(crate) category: ErrorCategory,
    pub(crate) is_operational: bool,
    #[serde(with = "iso_millis")]
    pub(crate) timestamp: DateTime<Utc>,
    #[serde(default)]
    pub(crate) trace_id: Option<String>,
    pub(crate) service_name: String,
    #[serde(default)]
    pub(crate) context: ErrorContext,
    #[serde(default)]
    pub(crate) stack: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) external_service: Option<String>,
}

impl ErrorValue {
    /// Creates an error of `kind` with the given code and kind defaults.
    pub fn new(kind: ErrorKind, code: impl Into<String>) -> Self {
        Self::from_fields(kind, ErrorFields::new(code))
    }

    /// Creates an error of `kind` from the full construction input.
    ///
    /// Without an explicit stack, one is captured here with the kind name and
    /// code spliced into the header line.
    pub fn from_fields(kind: ErrorKind, fields: ErrorFields) -> Self {
        let ErrorFields { code, message, trace_id, status_code, context, stack } = fields;
        let message = message.unwrap_or_default();
        let status_code = match status_code {
            Some(status) if allows_status_override(kind) => status,
            _ => kind.status_code(),
        };
        let stack = stack.unwrap_or_else(|| capture_stack(kind, &code, &message));

        Self {
            name: kind,
            code,
            message,
            status_code,
            category: kind.category(),
            is_operational: kind.is_operational(),
            timestamp: Utc::now(),
            trace_id,
            service_name: default_service_name(),
            context: context.unwrap_or_default(),
            stack,
            external_service: None,
        }
    }

    pub fn validation(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, code)
    }

    pub fn authentication(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, code)
    }

    pub fn authorization(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, code)
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code)
    }

    pub fn conflict(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, code)
    }

    /// Upstream failure attributed to the named service.
    pub fn external_service(code: impl Into<String>, service: impl Into<String>) -> Self {
        let mut err = Self::new(ErrorKind::ExternalService, code);
        err.external_service = Some(service.into());
        err
    }

    pub fn database(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, code)
    }

    pub fn network(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, code)
    }

    pub fn bad_config(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadConfig, code)
    }

    pub fn internal(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, code)
    }

    pub fn transformation(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transformation, code)
    }

    /// Sets the message and re-synthesizes a captured stack header.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let old_header = header_line(self.name, &self.code, &self.message);
        self.message = message.into();
        if let Some(rest) = self.stack.strip_prefix(&old_header) {
            self.stack = format!("{}{}", header_line(self.name, &self.code, &self.message), rest);
        }
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Builder form of [`update_context`](Self::update_context).
    pub fn with_context<C: IntoErrorContext>(mut self, patch: C) -> Self {
        self.update_context(patch);
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }

    /// Overrides the status of an upstream failure.
    ///
    /// Only [`ErrorKind::ExternalService`] and [`ErrorKind::Network`] accept
    /// an override; other kinds are returned unchanged.
    pub fn with_upstream_status(mut self, status_code: u16) -> Self {
        if allows_status_override(self.name) {
            self.status_code = status_code;
        }
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.name
    }

    /// Kind name, e.g. `"NotFoundError"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name.name()
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    #[inline]
    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[inline]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    #[inline]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    #[inline]
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    #[inline]
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// Upstream service name of an external service error.
    #[inline]
    pub fn external_service_name(&self) -> Option<&str> {
        self.external_service.as_deref()
    }

    /// Merges `patch` into the context and refreshes the timestamp.
    ///
    /// A patch carrying `originalError.stack` replaces this error's stack, so
    /// the deepest cause wins.
    pub fn update_context<C: IntoErrorContext>(&mut self, patch: C) {
        let patch = patch.into_error_context();
        self.update_timestamp_to_now();
        if let Some(stack) = patch.original_stack() {
            self.stack = stack.to_owned();
        }
        self.context.merge(patch);
    }

    #[inline]
    pub fn update_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = timestamp;
    }

    #[inline]
    pub fn update_timestamp_to_now(&mut self) {
        self.timestamp = Utc::now();
    }

    /// Records the architectural layer the error passed through.
    pub fn set_layer(&mut self, layer: impl Into<String>) {
        self.context.insert(LAYER_KEY, layer.into());
    }

    pub fn set_trace_id(&mut self, trace_id: impl Into<String>) {
        self.trace_id = Some(trace_id.into());
    }

    /// Plain JSON record of every field, timestamp as ISO-8601.
    pub fn to_json(&self) -> Value {
        // Every key is a string, so serialization has no failure path.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Rebuilds an error from [`to_json`](Self::to_json) output.
    ///
    /// Values are trusted as serialized; kind defaults are not re-derived.
    pub fn from_json(record: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(record)
    }

    /// Same as [`from_json`](Self::from_json) for a JSON string.
    pub fn from_json_str(record: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(record)
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&header_line(self.name, &self.code, &self.message))
    }
}

impl std::error::Error for ErrorValue {}

#[inline]
fn allows_status_override(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::ExternalService | ErrorKind::Network)
}

fn default_service_name() -> String {
    std::env::var(SERVICE_NAME_ENV)
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_SERVICE.to_owned())
}

fn header_line(kind: ErrorKind, code: &str, message: &str) -> String {
    if message.is_empty() {
        format!("{} [{}]", kind.name(), code)
    } else {
        format!("{} [{}]: {}", kind.name(), code, message)
    }
}

fn capture_stack(kind: ErrorKind, code: &str, message: &str) -> String {
    let header = header_line(kind, code, message);
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => format!("{}\n{}", header, backtrace),
        _ => header,
    }
}

/// RFC 3339 timestamps with millisecond precision.
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
