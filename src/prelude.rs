//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_map::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`context!`], [`lazy_context!`]
//! - **Types**: [`ErrorValue`], [`ErrorKind`], [`ErrorCategory`], [`ErrorContext`],
//!   [`ErrorMapBuilder`], [`ErrorTransformer`], [`Thrown`], [`RawError`]
//! - **Traits**: [`ResultTransformExt`], [`IntoErrorContext`]
//!
//! # Examples
//!
//! ```
//! use error_map::prelude::*;
//!
//! fn load_user(transformer: &ErrorTransformer, id: u64) -> TransformResult<String> {
//!     let raw: Result<String, &str> = Err("User not found");
//!     raw.or_transform(transformer, context! { "userId" => id })
//! }
//!
//! let transformer = ErrorTransformer::new(
//!     ErrorMapBuilder::new(ErrorValue::internal("INTERNAL_ERROR"))
//!         .equals("User not found")
//!         .throw_error_instance(ErrorValue::not_found("USER_NOT_FOUND")),
//!     "users",
//! );
//!
//! let err = load_user(&transformer, 42).unwrap_err();
//! assert_eq!(err.status_code(), 404);
//! ```

// Macros
pub use crate::{context, lazy_context};

// Core types
pub use crate::map::{ErrorMap, ErrorMapBuilder};
pub use crate::transform::{ErrorTransformer, LogVerbosity, TransformerConfig, TransformerOptions};
pub use crate::types::{
    ErrorCategory, ErrorContext, ErrorKind, ErrorValue, LazyContext, NormalizedError, RawError, Thrown,
    TransformResult,
};

// Traits
pub use crate::traits::{IntoErrorContext, ResultTransformExt};
