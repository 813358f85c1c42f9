//! Fluent construction of an [`ErrorMap`].
//!
//! The builder is a two-state machine encoded in types: [`ErrorMapBuilder`]
//! is the empty state and only offers rule inputs; every input moves to
//! [`PendingRule`], which only offers outputs. Starting a second input before
//! the first one has an output therefore does not compile:
//!
//! ```compile_fail
//! use error_map::{ErrorMapBuilder, ErrorValue};
//!
//! let builder = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL"))
//!     .equals("a")
//!     .equals("b");
//! ```

use std::sync::Arc;

use regex::Regex;
use serde::Deserialize;

use crate::map::action::Action;
use crate::map::condition::{Condition, TypeCheck};
use crate::map::{ErrorMap, Rule};
use crate::types::{ErrorContext, ErrorKind, ErrorValue, ErrorVec, NormalizedError, Thrown};

/// Property matched when a rule does not name its own.
pub const DEFAULT_GLOBAL_PROPERTY: &str = "message";

/// Plain configuration for [`ErrorMapBuilder::from_config`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMapConfig {
    #[serde(default)]
    pub global_property: Option<String>,
    pub rollback_error: ErrorValue,
}

/// Accumulates ordered rules plus the mandatory fallback error.
#[must_use = "an error map does nothing until it is built and handed to a transformer"]
#[derive(Debug, Clone)]
pub struct ErrorMapBuilder {
    global_property: String,
    rollback_error: ErrorValue,
    rules: ErrorVec<Rule>,
}

impl ErrorMapBuilder {
    /// Starts a map falling back to `rollback_error` and matching on `message`.
    pub fn new(rollback_error: ErrorValue) -> Self {
        Self { global_property: DEFAULT_GLOBAL_PROPERTY.to_owned(), rollback_error, rules: ErrorVec::new() }
    }

    pub fn from_config(config: ErrorMapConfig) -> Self {
        let builder = Self::new(config.rollback_error);
        match config.global_property {
            Some(property) => builder.global_property(property),
            None => builder,
        }
    }

    /// Sets the property read by rules without their own.
    pub fn global_property(mut self, property: impl Into<String>) -> Self {
        self.global_property = property.into();
        self
    }

    /// Rules added so far, in priority order.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Fires when the value equals `message` exactly.
    pub fn equals(self, message: impl Into<String>) -> PendingRule {
        self.input(Condition::Equals { message: message.into(), property: None })
    }

    /// Fires when the value contains every part, ignoring case.
    pub fn includes<I, S>(self, parts: I) -> PendingRule
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input(Condition::Includes { parts: parts.into_iter().map(Into::into).collect(), property: None })
    }

    /// Fires when `regex` matches the value.
    pub fn matches(self, regex: Regex) -> PendingRule {
        self.input(Condition::Matches { regex, property: None })
    }

    /// Fires when the error wraps a Rust error of type `E`.
    pub fn instance_of<E: std::error::Error + 'static>(self) -> PendingRule {
        self.input(Condition::InstanceOf(TypeCheck::of::<E>()))
    }

    /// Fires when the error is an [`ErrorValue`] of the given kind.
    pub fn kind_of(self, kind: ErrorKind) -> PendingRule {
        self.input(Condition::InstanceOf(TypeCheck::Kind(kind)))
    }

    /// Fires when the value is one of `values`, case-sensitively.
    pub fn one_of<I, S>(self, values: I) -> PendingRule
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input(Condition::OneOf { values: values.into_iter().map(Into::into).collect(), property: None })
    }

    /// Starts a rule from a prepared condition.
    pub fn input(self, condition: Condition) -> PendingRule {
        PendingRule { builder: self, input: condition }
    }

    /// Freezes the rules into an immutable, shareable map.
    pub fn build(self) -> ErrorMap {
        ErrorMap {
            rules: Arc::from(self.rules.into_vec()),
            global_property: Arc::from(self.global_property),
            rollback_error: self.rollback_error,
        }
    }
}

impl From<ErrorMapBuilder> for ErrorMap {
    fn from(builder: ErrorMapBuilder) -> Self {
        builder.build()
    }
}

/// A rule whose input is set and whose output is still missing.
#[must_use = "a rule input must be completed with an output"]
#[derive(Debug)]
pub struct PendingRule {
    builder: ErrorMapBuilder,
    input: Condition,
}

impl PendingRule {
    /// Reads `property` instead of the global property.
    ///
    /// Has no effect on `instance_of` / `kind_of` rules.
    pub fn on_property(mut self, property: impl Into<String>) -> Self {
        self.input = self.input.with_property(property);
        self
    }

    /// Completes the rule with a copy of `error`, context merged per call.
    pub fn throw_error_instance(self, error: ErrorValue) -> ErrorMapBuilder {
        self.output(Action::ThrowErrorInstance(error))
    }

    /// Completes the rule with a bare code.
    pub fn throw_string(self, code: impl Into<String>) -> ErrorMapBuilder {
        self.output(Action::ThrowString(code.into()))
    }

    /// Completes the rule with a handler building the result.
    pub fn throw_custom_error<F, T>(self, handler: F) -> ErrorMapBuilder
    where
        F: Fn(&NormalizedError, ErrorContext) -> T + Send + Sync + 'static,
        T: Into<Thrown>,
    {
        self.output(Action::ThrowCustomError(Arc::new(move |error, context| handler(error, context).into())))
    }

    /// Completes the rule by passing the original error through.
    pub fn pass(self) -> ErrorMapBuilder {
        self.output(Action::ThrowOriginalError)
    }

    fn output(self, action: Action) -> ErrorMapBuilder {
        let Self { mut builder, input } = self;
        builder.rules.push(Rule { input, output: action });
        builder
    }
}
