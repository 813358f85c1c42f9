//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.transform_err()`, mirroring the sync
//! [`ResultTransformExt`](crate::traits::ResultTransformExt).

use core::future::Future;

use crate::traits::IntoErrorContext;
use crate::transform::ErrorTransformer;
use crate::types::RawError;

use super::transform_future::TransformFuture;

/// Extension trait routing a future's error through an [`ErrorTransformer`].
///
/// # Examples
///
/// ```rust,no_run
/// use error_map::prelude_async::*;
///
/// #[derive(Debug)]
/// struct User;
///
/// async fn fetch_from_db(_id: u64) -> Result<User, std::io::Error> {
///     Err(std::io::Error::other("connection reset"))
/// }
///
/// async fn fetch_user(transformer: &ErrorTransformer, id: u64) -> TransformResult<User> {
///     fetch_from_db(id)
///         .transform_err(transformer, context! { "userId" => id })
///         .await
/// }
/// ```
pub trait FutureTransformExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Transforms the future's error with `patch` as context.
    fn transform_err<C>(self, transformer: &ErrorTransformer, patch: C) -> TransformFuture<Self, C>
    where
        E: Into<RawError>,
        C: IntoErrorContext;
}

impl<Fut, T, E> FutureTransformExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn transform_err<C>(self, transformer: &ErrorTransformer, patch: C) -> TransformFuture<Self, C>
    where
        E: Into<RawError>,
        C: IntoErrorContext,
    {
        TransformFuture::new(self, transformer.clone(), patch)
    }
}
