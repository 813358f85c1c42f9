//! Declarative error maps: turn unstructured failures into typed, coded,
//! HTTP-aware error values.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_map::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a map and transforming failures
//!
//! ```
//! use error_map::{context, ErrorMapBuilder, ErrorTransformer, ErrorValue};
//!
//! let map = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL_ERROR"))
//!     .equals("User not found")
//!     .throw_string("USER_NOT_FOUND")
//!     .includes(["timeout", "connection"])
//!     .throw_error_instance(ErrorValue::network("UPSTREAM_TIMEOUT"));
//! let transformer = ErrorTransformer::new(map, "user_service");
//!
//! let thrown = transformer.transform("Connection TIMEOUT occurred", context! { "layer" => "service" });
//! let err = thrown.into_error_value().unwrap();
//! assert_eq!(err.code(), "UPSTREAM_TIMEOUT");
//! assert_eq!(err.context().get_str("layer"), Some("service"));
//! assert!(err.context().contains_key("originalError"));
//! ```
//!
//! ## Wrapping calls
//!
//! ```
//! use error_map::{ErrorMapBuilder, ErrorTransformer, ErrorValue};
//!
//! let transformer = ErrorTransformer::new(
//!     ErrorMapBuilder::new(ErrorValue::internal("INTERNAL_ERROR")),
//!     "math",
//! );
//! let answer = transformer.with_sync_transform(|x: i32| Ok::<_, &str>(x * 2), ());
//! assert_eq!(answer(21).unwrap(), 42);
//! ```
//!
//! ## Wire format
//!
//! ```
//! use error_map::ErrorValue;
//!
//! let err = ErrorValue::validation("EMAIL_INVALID").with_message("email is malformed");
//! let restored = ErrorValue::from_json(err.to_json()).unwrap();
//! assert_eq!(restored.code(), "EMAIL_INVALID");
//! assert_eq!(restored.status_code(), 400);
//! ```

/// Ergonomic macros for building context patches
pub mod macros;
/// Ordered rule maps and their builder
pub mod map;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits at the crate's seams
pub mod traits;
/// The transformation engine
pub mod transform;
/// Error values, context, normalization
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use map::{ErrorMap, ErrorMapBuilder, ErrorMapConfig, PendingRule};
pub use traits::*;
pub use transform::{ErrorTransformer, LogVerbosity, TransformerConfig, TransformerOptions};
pub use types::*;
