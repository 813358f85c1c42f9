//! Trait for converting types into a context patch.
//!
//! Anything that can describe a set of key/value pairs can be merged into an
//! [`ErrorValue`](crate::ErrorValue)'s context or handed to a transformation
//! as its patch.
//!
//! # Implementations
//!
//! - `ErrorContext` - identity conversion
//! - `()` - the empty patch
//! - `serde_json::Map`, `BTreeMap`, `HashMap` with string keys
//! - arrays and `Vec`s of `(key, value)` pairs
//! - `serde_json::Value` - objects merge key by key, anything else is ignored
//!
//! # Examples
//!
//! ```
//! use error_map::traits::IntoErrorContext;
//!
//! let ctx = [("layer", "service"), ("method", "find_user")].into_error_context();
//! assert_eq!(ctx.get_str("layer"), Some("service"));
//!
//! let empty = ().into_error_context();
//! assert!(empty.is_empty());
//! ```
use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::types::error_context::ErrorContext;

/// Converts a type into an [`ErrorContext`] patch.
///
/// # Implementing for Custom Types
///
/// ```
/// use error_map::{traits::IntoErrorContext, ErrorContext};
///
/// struct RequestInfo { user_id: u64, route: &'static str }
///
/// impl IntoErrorContext for RequestInfo {
///     fn into_error_context(self) -> ErrorContext {
///         ErrorContext::new().with("userId", self.user_id).with("route", self.route)
///     }
/// }
///
/// let ctx = RequestInfo { user_id: 7, route: "/users" }.into_error_context();
/// assert_eq!(ctx.len(), 2);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an error context patch",
    label = "this type does not implement `IntoErrorContext`",
    note = "use `ErrorContext::new().with(..)`, the `context!` macro, or an array of (key, value) pairs"
)]
pub trait IntoErrorContext {
    /// Converts `self` into an [`ErrorContext`].
    fn into_error_context(self) -> ErrorContext;
}

impl IntoErrorContext for ErrorContext {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        self
    }
}

impl IntoErrorContext for &ErrorContext {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        self.clone()
    }
}

impl IntoErrorContext for () {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new()
    }
}

impl IntoErrorContext for Map<String, Value> {
    fn into_error_context(self) -> ErrorContext {
        self.into_iter().collect()
    }
}

impl IntoErrorContext for Value {
    /// Objects merge key by key; any other JSON value is an empty patch.
    fn into_error_context(self) -> ErrorContext {
        match self {
            Value::Object(map) => map.into_error_context(),
            _ => ErrorContext::new(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> IntoErrorContext for BTreeMap<K, V> {
    fn into_error_context(self) -> ErrorContext {
        self.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>, S> IntoErrorContext for HashMap<K, V, S> {
    fn into_error_context(self) -> ErrorContext {
        self.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> IntoErrorContext for Vec<(K, V)> {
    fn into_error_context(self) -> ErrorContext {
        self.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> IntoErrorContext for [(K, V); N] {
    fn into_error_context(self) -> ErrorContext {
        self.into_iter().collect()
    }
}
