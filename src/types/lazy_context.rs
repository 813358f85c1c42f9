//! Deferred context generation.
//!
//! [`LazyContext`] wraps a closure that builds an [`ErrorContext`] only when
//! a transformation actually happens, so wrapped calls pay nothing for their
//! context patch on the success path.
//!
//! # Examples
//!
//! ```
//! use error_map::{ErrorContext, LazyContext};
//! use error_map::traits::IntoErrorContext;
//!
//! let user_id = 42;
//! let lazy = LazyContext::new(move || ErrorContext::new().with("userId", user_id));
//! assert_eq!(lazy.into_error_context().get("userId"), Some(&42.into()));
//! ```
use crate::{traits::IntoErrorContext, types::error_context::ErrorContext};

/// A context patch evaluated on first use.
#[derive(Clone)]
#[repr(transparent)]
pub struct LazyContext<F> {
    generator: F,
}

impl<F> LazyContext<F> {
    /// Creates a new `LazyContext` from a closure.
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> IntoErrorContext for LazyContext<F>
where
    F: FnOnce() -> ErrorContext,
{
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        (self.generator)()
    }
}
