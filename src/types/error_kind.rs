//! Fixed error taxonomy.
//!
//! Every [`ErrorValue`](crate::ErrorValue) belongs to exactly one [`ErrorKind`].
//! The kind pins the category, the default HTTP status and the operational
//! flag; none of those vary between two values of the same kind.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Coarse classification carried on the wire next to the error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Input failed validation.
    Validation,
    /// Caller identity could not be established.
    Authentication,
    /// Caller is known but not allowed.
    Authorization,
    /// Requested resource does not exist.
    NotFound,
    /// Request conflicts with current state.
    Conflict,
    /// An upstream dependency failed.
    ExternalService,
    /// Storage layer failure.
    Database,
    /// Transport level failure.
    Network,
    /// Misconfiguration detected at runtime.
    BadConfig,
    /// Catch-all for unexpected failures.
    Internal,
    /// Failure inside the error transformation itself.
    Transformation,
}

impl ErrorCategory {
    /// Stable wire name of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::ExternalService => "external_service",
            Self::Database => "database",
            Self::Network => "network",
            Self::BadConfig => "bad_config",
            Self::Internal => "internal",
            Self::Transformation => "transformation",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a concrete error kind.
///
/// Serialized as the kind name (`"ValidationError"`, `"NetworkError"`, ...),
/// which is also what `name` holds on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "ValidationError")]
    Validation,
    #[serde(rename = "AuthenticationError")]
    Authentication,
    #[serde(rename = "AuthorizationError")]
    Authorization,
    #[serde(rename = "NotFoundError")]
    NotFound,
    #[serde(rename = "ConflictError")]
    Conflict,
    #[serde(rename = "ExternalServiceError")]
    ExternalService,
    #[serde(rename = "DatabaseError")]
    Database,
    #[serde(rename = "NetworkError")]
    Network,
    #[serde(rename = "BadConfigError")]
    BadConfig,
    #[serde(rename = "InternalError")]
    Internal,
    #[serde(rename = "TransformationError")]
    Transformation,
}

impl ErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [ErrorKind; 11] = [
        Self::Validation,
        Self::Authentication,
        Self::Authorization,
        Self::NotFound,
        Self::Conflict,
        Self::ExternalService,
        Self::Database,
        Self::Network,
        Self::BadConfig,
        Self::Internal,
        Self::Transformation,
    ];

    /// Kind name used as the error `name`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::Authentication => "AuthenticationError",
            Self::Authorization => "AuthorizationError",
            Self::NotFound => "NotFoundError",
            Self::Conflict => "ConflictError",
            Self::ExternalService => "ExternalServiceError",
            Self::Database => "DatabaseError",
            Self::Network => "NetworkError",
            Self::BadConfig => "BadConfigError",
            Self::Internal => "InternalError",
            Self::Transformation => "TransformationError",
        }
    }

    /// Looks a kind up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::Validation => ErrorCategory::Validation,
            Self::Authentication => ErrorCategory::Authentication,
            Self::Authorization => ErrorCategory::Authorization,
            Self::NotFound => ErrorCategory::NotFound,
            Self::Conflict => ErrorCategory::Conflict,
            Self::ExternalService => ErrorCategory::ExternalService,
            Self::Database => ErrorCategory::Database,
            Self::Network => ErrorCategory::Network,
            Self::BadConfig => ErrorCategory::BadConfig,
            Self::Internal => ErrorCategory::Internal,
            Self::Transformation => ErrorCategory::Transformation,
        }
    }

    /// Default HTTP status for the kind.
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Authentication => 401,
            Self::Authorization => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::ExternalService => 502,
            Self::Network => 503,
            Self::Database | Self::BadConfig | Self::Internal | Self::Transformation => 500,
        }
    }

    /// `true` for expected, user-caused failures.
    pub const fn is_operational(self) -> bool {
        !matches!(self, Self::Database | Self::BadConfig | Self::Internal | Self::Transformation)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
