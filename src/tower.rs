//! Tower integration for error-map.
//!
//! [`TransformLayer`] routes every error of the wrapped service through an
//! [`ErrorTransformer`], so handlers can fail with whatever they like while
//! the service boundary only ever reports [`Thrown`] values. Rendering a
//! response is left to the caller: [`Thrown::status_code`] and
//! [`Thrown::code`] carry what a response needs.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-map = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_map::tower::TransformLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(TransformLayer::new(transformer, context! { "layer" => "http" }))
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::traits::IntoErrorContext;
use crate::transform::ErrorTransformer;
use crate::types::{RawError, Thrown};

/// A Tower [`Layer`] that transforms service errors.
///
/// # Type Parameters
///
/// * `C` - The context patch, cloned into every call
#[derive(Clone, Debug)]
pub struct TransformLayer<C> {
    transformer: ErrorTransformer,
    patch: C,
}

impl<C> TransformLayer<C> {
    /// Creates a new `TransformLayer` applying `transformer` with `patch`.
    #[inline]
    pub fn new(transformer: ErrorTransformer, patch: C) -> Self {
        Self { transformer, patch }
    }

    #[inline]
    pub fn transformer(&self) -> &ErrorTransformer {
        &self.transformer
    }

    #[inline]
    pub const fn patch(&self) -> &C {
        &self.patch
    }
}

impl<S, C: Clone> Layer<S> for TransformLayer<C> {
    type Service = TransformService<S, C>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        TransformService { inner, transformer: self.transformer.clone(), patch: self.patch.clone() }
    }
}

/// A Tower [`Service`] whose errors are [`Thrown`] values.
#[derive(Clone, Debug)]
pub struct TransformService<S, C> {
    inner: S,
    transformer: ErrorTransformer,
    patch: C,
}

impl<S, C> TransformService<S, C> {
    #[inline]
    pub fn new(inner: S, transformer: ErrorTransformer, patch: C) -> Self {
        Self { inner, transformer, patch }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, C, Request> Service<Request> for TransformService<S, C>
where
    S: Service<Request>,
    S::Error: Into<RawError>,
    C: IntoErrorContext + Clone,
{
    type Response = S::Response;
    type Error = Thrown;
    type Future = TransformServiceFuture<S::Future, C>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|e| self.transformer.transform(e, self.patch.clone()))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        TransformServiceFuture {
            inner: self.inner.call(request),
            transformer: self.transformer.clone(),
            patch: Some(self.patch.clone()),
        }
    }
}

pin_project! {
    /// Future returned by [`TransformService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TransformServiceFuture<F, C> {
        #[pin]
        inner: F,
        transformer: ErrorTransformer,
        patch: Option<C>,
    }
}

impl<F, T, E, C> Future for TransformServiceFuture<F, C>
where
    F: Future<Output = Result<T, E>>,
    E: Into<RawError>,
    C: IntoErrorContext,
{
    type Output = Result<T, Thrown>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(response)) => Poll::Ready(Ok(response)),
            Poll::Ready(Err(error)) => {
                let patch = this.patch.take().expect("polled after completion");
                Poll::Ready(Err(this.transformer.transform(error, patch)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E, C> FusedFuture for TransformServiceFuture<F, C>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Into<RawError>,
    C: IntoErrorContext,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.patch.is_none() || self.inner.is_terminated()
    }
}

/// Extension trait for wrapping services with a transformer.
pub trait ServiceTransformExt<Request>: Service<Request> + Sized {
    /// Wraps this service so its errors go through `transformer`.
    fn with_transformer<C>(self, transformer: ErrorTransformer, patch: C) -> TransformService<Self, C>
    where
        C: IntoErrorContext + Clone,
    {
        TransformService::new(self, transformer, patch)
    }
}

impl<S, Request> ServiceTransformExt<Request> for S where S: Service<Request> {}
