//! Classification of transport-layer failures into network errors.

use crate::types::error_context::ErrorContext;
use crate::types::error_value::{ErrorFields, ErrorValue};
use crate::types::error_kind::ErrorKind;

/// Code returned when a failure is handed to the wrong conversion path.
pub const INVALID_CALL_CODE: &str = "INVALID_CALL";

/// Fallback entry for transport codes missing from the table.
pub const UNKNOWN_TRANSPORT: TransportMapping =
    TransportMapping { code: "NETWORK_UNKNOWN_ERROR", status_code: 520 };

/// Target code and status for one transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportMapping {
    pub code: &'static str,
    pub status_code: u16,
}

const TRANSPORT_TABLE: &[(&str, TransportMapping)] = &[
    ("ECONNABORTED", TransportMapping { code: "NETWORK_TIMEOUT", status_code: 504 }),
    ("ETIMEDOUT", TransportMapping { code: "NETWORK_TIMEOUT", status_code: 504 }),
    ("ECONNREFUSED", TransportMapping { code: "NETWORK_CONNECTION_REFUSED", status_code: 503 }),
    (
        "ERR_FR_TOO_MANY_REDIRECTS",
        TransportMapping { code: "NETWORK_TOO_MANY_REDIRECTS", status_code: 508 },
    ),
    ("ERR_CANCELED", TransportMapping { code: "NETWORK_REQUEST_CANCELED", status_code: 499 }),
    ("ERR_INVALID_URL", TransportMapping { code: "NETWORK_INVALID_URL", status_code: 400 }),
    ("ERR_BAD_OPTION", TransportMapping { code: "NETWORK_BAD_CONFIG", status_code: 500 }),
    ("ERR_BAD_OPTION_VALUE", TransportMapping { code: "NETWORK_BAD_CONFIG", status_code: 500 }),
];

/// Looks up a transport error code, falling back to [`UNKNOWN_TRANSPORT`].
pub fn lookup_transport_code(code: Option<&str>) -> TransportMapping {
    code.and_then(|code| TRANSPORT_TABLE.iter().find(|(known, _)| *known == code))
        .map(|(_, mapping)| *mapping)
        .unwrap_or(UNKNOWN_TRANSPORT)
}

/// A client-side transport failure as reported by an HTTP client.
///
/// `has_request` / `has_response` mirror whether the client got as far as
/// sending a request and whether any response came back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportFailure {
    pub code: Option<String>,
    pub message: String,
    pub has_request: bool,
    pub has_response: bool,
}

impl TransportFailure {
    /// A failure where the request went out and nothing came back.
    pub fn request_only(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: Some(code.into()), message: message.into(), has_request: true, has_response: false }
    }

    #[inline]
    pub fn is_request_only(&self) -> bool {
        self.has_request && !self.has_response
    }
}

impl ErrorValue {
    /// Converts a request-only transport failure into a network error.
    ///
    /// Failures that never sent a request, or that did receive a response,
    /// belong to a different conversion path and are rejected with an
    /// internal `INVALID_CALL` error.
    pub fn network_from_transport(failure: &TransportFailure) -> Result<ErrorValue, ErrorValue> {
        if !failure.is_request_only() {
            return Err(ErrorValue::internal(INVALID_CALL_CODE)
                .with_message("network conversion requires a request without a response")
                .with_context(
                    ErrorContext::new()
                        .with("hasRequest", failure.has_request)
                        .with("hasResponse", failure.has_response),
                ));
        }

        let mapping = lookup_transport_code(failure.code.as_deref());
        let mut context = ErrorContext::new();
        if let Some(code) = &failure.code {
            context.insert("transportCode", code.as_str());
        }

        Ok(ErrorValue::from_fields(
            ErrorKind::Network,
            ErrorFields {
                code: mapping.code.to_owned(),
                message: Some(failure.message.clone()),
                status_code: Some(mapping.status_code),
                context: Some(context),
                ..Default::default()
            },
        ))
    }
}
