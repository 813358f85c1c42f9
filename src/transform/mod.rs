//! The transformation engine.
//!
//! [`ErrorTransformer::transform`] turns any failure into a [`Thrown`]:
//!
//! 1. A copy of the fallback gets the call's context patch plus
//!    `originalError` merged in, whatever happens next.
//! 2. The raw input is normalized. Unusable input, or input whose global
//!    property is empty, yields the fallback straight away.
//! 3. Rules are tried in insertion order; the first match decides the
//!    outcome and evaluation stops there.
//! 4. Without a match the fallback is produced.
//!
//! Rule-bound error values and the fallback are templates: each call works on
//! its own copy, so a transformer can be shared freely between threads and
//! concurrent tasks.
//!
//! # Examples
//!
//! ```
//! use error_map::{ErrorMapBuilder, ErrorTransformer, ErrorValue, Thrown};
//!
//! let map = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL_ERROR"))
//!     .equals("User not found")
//!     .throw_string("USER_NOT_FOUND");
//! let transformer = ErrorTransformer::new(map, "users");
//!
//! let thrown = transformer.transform("User not found", ());
//! assert_eq!(thrown.as_code(), Some("USER_NOT_FOUND"));
//!
//! let thrown = transformer.transform("user not found", ());
//! assert_eq!(thrown.code(), Some("INTERNAL_ERROR"));
//! ```

use std::sync::Arc;

use crate::map::{Action, ErrorMap};
use crate::traits::IntoErrorContext;
use crate::types::{
    ErrorContext, ErrorValue, NormalizedError, RawError, Thrown, TransformResult, ORIGINAL_ERROR_KEY,
    TRANSFORMER_MODULE_KEY,
};

pub mod options;

pub use options::{LogVerbosity, ParseLogVerbosityError, TransformerConfig, TransformerOptions, UNKNOWN_MODULE};

/// Applies an [`ErrorMap`] to failures.
///
/// Cloning is cheap; clones share the same immutable map.
#[derive(Debug, Clone)]
pub struct ErrorTransformer {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    map: ErrorMap,
    module_name: String,
    options: TransformerOptions,
}

impl ErrorTransformer {
    /// Creates a transformer labelled `module_name` with default options.
    pub fn new(error_map: impl Into<ErrorMap>, module_name: impl Into<String>) -> Self {
        Self::from_config(TransformerConfig::new(error_map).module_name(module_name), TransformerOptions::default())
    }

    /// Creates a transformer from explicit configuration.
    ///
    /// A missing module name falls back to [`UNKNOWN_MODULE`] with a warning.
    pub fn from_config(config: TransformerConfig, options: TransformerOptions) -> Self {
        let module_name = config.module_name.filter(|name| !name.is_empty()).unwrap_or_else(|| {
            tracing::warn!(
                module = UNKNOWN_MODULE,
                "error transformer created without a module name; produced errors will be attributed to `{}`",
                UNKNOWN_MODULE
            );
            UNKNOWN_MODULE.to_owned()
        });

        Self { inner: Arc::new(Inner { map: config.error_map, module_name, options }) }
    }

    #[inline]
    pub fn module_name(&self) -> &str {
        &self.inner.module_name
    }

    #[inline]
    pub fn error_map(&self) -> &ErrorMap {
        &self.inner.map
    }

    #[inline]
    pub fn options(&self) -> &TransformerOptions {
        &self.inner.options
    }

    /// Reclassifies a failure. Always produces a [`Thrown`].
    pub fn transform<R, C>(&self, raw: R, patch: C) -> Thrown
    where
        R: Into<RawError>,
        C: IntoErrorContext,
    {
        let map = &self.inner.map;
        let patch = patch.into_error_context();
        let normalized = raw.into().normalize();

        let mut fallback = map.rollback_error().clone();
        let cause = normalized.as_ref().map_or_else(
            || NormalizedError::unknown().to_context_value(),
            NormalizedError::to_context_value,
        );
        fallback.update_context(patch.clone().with(ORIGINAL_ERROR_KEY, cause));

        let Some(error) = normalized.filter(|error| error.property(map.global_property()).is_some()) else {
            tracing::debug!(
                module = %self.inner.module_name,
                property = map.global_property(),
                code = fallback.code(),
                "error has no usable match property; producing fallback"
            );
            return Thrown::from(fallback);
        };

        for (index, rule) in map.rules().iter().enumerate() {
            if rule.input.evaluate(&error, map.global_property()) {
                let thrown = self.execute(&rule.output, error, patch);
                tracing::debug!(
                    module = %self.inner.module_name,
                    rule = index,
                    input = rule.input.label(),
                    output = rule.output.label(),
                    code = thrown.code(),
                    "error map rule matched"
                );
                return thrown;
            }
        }

        tracing::debug!(
            module = %self.inner.module_name,
            rules = map.rules().len(),
            code = fallback.code(),
            "no error map rule matched; producing fallback"
        );
        self.print_outcome(&fallback, false);
        Thrown::from(fallback)
    }

    /// Runs `f` and transforms its error, if any.
    pub fn call_sync<F, T, E, C>(&self, f: F, patch: C) -> TransformResult<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<RawError>,
        C: IntoErrorContext,
    {
        f().map_err(|error| self.transform(error, patch))
    }

    /// Wraps `f` so every error it returns is transformed with `patch`.
    ///
    /// Successful results pass through untouched.
    pub fn with_sync_transform<F, A, T, E, C>(&self, f: F, patch: C) -> impl Fn(A) -> TransformResult<T>
    where
        F: Fn(A) -> Result<T, E>,
        E: Into<RawError>,
        C: IntoErrorContext + Clone,
    {
        let transformer = self.clone();
        move |args| f(args).map_err(|error| transformer.transform(error, patch.clone()))
    }

    /// Async analog of [`with_sync_transform`](Self::with_sync_transform).
    ///
    /// The returned function yields a [`TransformFuture`](crate::async_ext::TransformFuture)
    /// that resolves to `f`'s value or to the transformed error.
    #[cfg(feature = "async")]
    pub fn with_async_transform<F, A, Fut, T, E, C>(
        &self,
        f: F,
        patch: C,
    ) -> impl Fn(A) -> crate::async_ext::TransformFuture<Fut, C>
    where
        F: Fn(A) -> Fut,
        Fut: core::future::Future<Output = Result<T, E>>,
        E: Into<RawError>,
        C: IntoErrorContext + Clone,
    {
        let transformer = self.clone();
        move |args| crate::async_ext::TransformFuture::new(f(args), transformer.clone(), patch.clone())
    }

    fn execute(&self, action: &Action, error: NormalizedError, patch: ErrorContext) -> Thrown {
        let module_name = &self.inner.module_name;
        let options = &self.inner.options;

        match action {
            Action::ThrowOriginalError => match error.downcast_ref::<ErrorValue>() {
                Some(value) => Thrown::from(value.clone()),
                None => Thrown::Original(error),
            },
            Action::ThrowErrorInstance(template) => {
                let mut produced = template.clone();
                let mut context = template.context().clone();
                context.merge(patch);
                context.insert(TRANSFORMER_MODULE_KEY, module_name.as_str());
                context.insert(ORIGINAL_ERROR_KEY, error.to_context_value());
                produced.update_context(context);
                self.print_outcome(&produced, true);
                Thrown::from(produced)
            },
            Action::ThrowCustomError(handler) => {
                let context = patch.with(TRANSFORMER_MODULE_KEY, module_name.as_str());
                handler(&error, context)
            },
            Action::ThrowString(code) => {
                if options.log.allows(true) {
                    tracing::debug!(module = %module_name, code = code.as_str(), matched = true, "printing outcome");
                    eprintln!("[{}] {} -> {}", module_name, error, code);
                }
                Thrown::Code(code.clone())
            },
        }
    }

    /// Prints `produced` when the verbosity covers this kind of outcome.
    fn print_outcome(&self, produced: &ErrorValue, matched: bool) {
        let options = &self.inner.options;
        if !options.log.allows(matched) {
            return;
        }
        tracing::debug!(module = %self.inner.module_name, code = produced.code(), matched, "printing outcome");
        produced.log(&options.log_options);
    }
}
