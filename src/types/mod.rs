//! Error values and the shapes around them.
//!
//! - [`ErrorValue`]: the structured failure record, with its fixed
//!   [`ErrorKind`] taxonomy and [`ErrorContext`] metadata.
//! - [`RawError`] / [`NormalizedError`]: untyped input and its canonical form.
//! - [`Thrown`]: what a transformation ends in.
//!
//! # Examples
//!
//! ```
//! use error_map::{ErrorCategory, ErrorValue};
//!
//! let mut err = ErrorValue::not_found("USER_NOT_FOUND").with_message("no such user");
//! err.update_context([("userId", 42)]);
//!
//! assert_eq!(err.status_code(), 404);
//! assert_eq!(err.category(), ErrorCategory::NotFound);
//! assert_eq!(err.context().get("userId"), Some(&42.into()));
//! ```
use smallvec::SmallVec;

pub mod error_context;
pub mod error_formatter;
pub mod error_kind;
pub mod error_value;
pub mod lazy_context;
pub mod network;
pub mod normalized;
pub mod thrown;
pub mod validation_issue;

pub use error_context::*;
pub use error_formatter::{parse_stack, LogOptions, StackFrame};
pub use error_kind::*;
pub use error_value::*;
pub use lazy_context::*;
pub use network::*;
pub use normalized::*;
pub use thrown::*;
pub use validation_issue::*;

/// SmallVec-backed collection used for rule lists and parsed stacks.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Result of a call wrapped by an [`ErrorTransformer`](crate::ErrorTransformer).
pub type TransformResult<T> = Result<T, Thrown>;
