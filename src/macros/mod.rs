//! Ergonomic macros for building context patches.
//!
//! - [`macro@crate::context`] - builds an [`ErrorContext`](crate::types::ErrorContext)
//!   from `key => value` pairs.
//! - [`macro@crate::lazy_context`] - same, but deferred until a transformation
//!   actually happens.
//!
//! # Examples
//!
//! ```
//! use error_map::{context, ErrorValue};
//!
//! let err = ErrorValue::database("QUERY_FAILED").with_context(context! {
//!     "layer" => "repository",
//!     "table" => "users",
//!     "attempt" => 3,
//! });
//!
//! assert_eq!(err.context().get_str("table"), Some("users"));
//! assert_eq!(err.context().len(), 3);
//! ```

/// Builds an [`ErrorContext`](crate::types::ErrorContext) from `key => value` pairs.
///
/// Keys convert into `String`, values into `serde_json::Value`.
///
/// # Examples
///
/// ```
/// use error_map::context;
///
/// let empty = context! {};
/// assert!(empty.is_empty());
///
/// let ctx = context! { "class" => "UserService", "method" => "find" };
/// assert_eq!(ctx.get_str("method"), Some("find"));
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::types::ErrorContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::types::ErrorContext::new();
        $(
            ctx.insert($key, $value);
        )+
        ctx
    }};
}

/// Deferred form of [`context!`](crate::context).
///
/// Values are evaluated only when the patch is consumed, i.e. on the error
/// path of a wrapped call.
///
/// # Examples
///
/// ```
/// use error_map::{lazy_context, traits::IntoErrorContext};
///
/// let lazy = lazy_context! { "requestId" => format!("req-{}", 7) };
/// assert_eq!(lazy.into_error_context().get_str("requestId"), Some("req-7"));
/// ```
#[macro_export]
macro_rules! lazy_context {
    ($($tokens:tt)*) => {
        $crate::types::LazyContext::new(move || $crate::context! { $($tokens)* })
    };
}
