//! Future wrapper that transforms errors on completion.
//!
//! [`TransformFuture`] wraps a `Future<Output = Result<T, E>>` and hands the
//! error, if any, to an [`ErrorTransformer`] together with the context patch.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::IntoErrorContext;
use crate::transform::ErrorTransformer;
use crate::types::{RawError, TransformResult};

pin_project! {
    /// A Future that runs its inner future and transforms a failure.
    ///
    /// The patch is only converted when the inner future resolves to an
    /// error; the success path never touches it.
    ///
    /// # Cancel Safety
    ///
    /// `TransformFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_map::prelude_async::*;
    ///
    /// async fn example(transformer: ErrorTransformer) {
    ///     let result = async { Err::<(), _>("boom") }
    ///         .transform_err(&transformer, ())
    ///         .await;
    ///     assert!(result.is_err());
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct TransformFuture<Fut, C> {
        #[pin]
        future: Fut,
        transformer: ErrorTransformer,
        patch: Option<C>,
    }
}

impl<Fut, C> TransformFuture<Fut, C> {
    /// Creates a new `TransformFuture` around `future`.
    #[inline]
    pub fn new(future: Fut, transformer: ErrorTransformer, patch: C) -> Self {
        Self { future, transformer, patch: Some(patch) }
    }
}

impl<Fut, C, T, E> Future for TransformFuture<Fut, C>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<RawError>,
    C: IntoErrorContext,
{
    type Output = TransformResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            res.map_err(|err| {
                let patch = this
                    .patch
                    .take()
                    .expect("TransformFuture polled after completion; this is a bug");
                this.transformer.transform(err, patch)
            })
        })
    }
}

impl<Fut, C, T, E> FusedFuture for TransformFuture<Fut, C>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<RawError>,
    C: IntoErrorContext,
{
    fn is_terminated(&self) -> bool {
        self.patch.is_none() || self.future.is_terminated()
    }
}
