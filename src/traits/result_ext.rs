//! Extension trait routing a `Result`'s error through a transformer.
//!
//! # Examples
//!
//! ```
//! use error_map::traits::ResultTransformExt;
//! use error_map::{context, ErrorMapBuilder, ErrorTransformer, ErrorValue};
//!
//! let transformer = ErrorTransformer::new(
//!     ErrorMapBuilder::new(ErrorValue::internal("INTERNAL_ERROR"))
//!         .includes(["no such file"])
//!         .throw_error_instance(ErrorValue::not_found("CONFIG_MISSING")),
//!     "config",
//! );
//!
//! let err = std::fs::read_to_string("/definitely/not/here.toml")
//!     .or_transform(&transformer, context! { "layer" => "loader" })
//!     .unwrap_err();
//! assert_eq!(err.code(), Some("CONFIG_MISSING"));
//! ```

use std::error::Error;

use crate::traits::IntoErrorContext;
use crate::transform::ErrorTransformer;
use crate::types::{LazyContext, RawError, TransformResult};

/// Adds transformer routing to `Result` types.
///
/// [`or_transform`](Self::or_transform) takes errors that convert into
/// [`RawError`]; [`or_transform_err`](Self::or_transform_err) takes any
/// thread-safe error type, such as an application's own error enum.
pub trait ResultTransformExt<T, E> {
    /// Transforms the error with `patch` as context.
    fn or_transform<C: IntoErrorContext>(self, transformer: &ErrorTransformer, patch: C) -> TransformResult<T>
    where
        E: Into<RawError>;

    /// Transforms the error with a patch built only on the error path.
    fn or_transform_with<F, C>(self, transformer: &ErrorTransformer, f: F) -> TransformResult<T>
    where
        E: Into<RawError>,
        F: FnOnce() -> C,
        C: IntoErrorContext;

    /// Boxes any error type and transforms it with `patch` as context.
    ///
    /// The boxed error keeps its type, so `instance_of::<E>()` rules match it.
    fn or_transform_err<C: IntoErrorContext>(self, transformer: &ErrorTransformer, patch: C) -> TransformResult<T>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> ResultTransformExt<T, E> for Result<T, E> {
    #[inline]
    fn or_transform<C: IntoErrorContext>(self, transformer: &ErrorTransformer, patch: C) -> TransformResult<T>
    where
        E: Into<RawError>,
    {
        self.map_err(|e| transformer.transform(e, patch))
    }

    #[inline]
    fn or_transform_with<F, C>(self, transformer: &ErrorTransformer, f: F) -> TransformResult<T>
    where
        E: Into<RawError>,
        F: FnOnce() -> C,
        C: IntoErrorContext,
    {
        self.map_err(|e| transformer.transform(e, LazyContext::new(|| f().into_error_context())))
    }

    #[inline]
    fn or_transform_err<C: IntoErrorContext>(self, transformer: &ErrorTransformer, patch: C) -> TransformResult<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| transformer.transform(RawError::error(e), patch))
    }
}
