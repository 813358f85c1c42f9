//! Traits at the crate's seams.
//!
//! - [`IntoErrorContext`]: anything usable as a context patch
//! - [`ResultTransformExt`]: `.or_transform()` and `.or_transform_err()` on `Result`
//!
//! # Examples
//!
//! ```
//! use error_map::ErrorValue;
//!
//! let mut err = ErrorValue::conflict("EMAIL_TAKEN");
//! err.update_context(vec![("email", "a@example.com")]);
//! assert_eq!(err.context().get_str("email"), Some("a@example.com"));
//! ```

pub mod into_error_context;
pub mod result_ext;

pub use into_error_context::IntoErrorContext;
pub use result_ext::ResultTransformExt;
