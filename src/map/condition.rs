//! Rule inputs: what a normalized error must look like for a rule to fire.

use core::fmt;

use regex::Regex;

use crate::types::{ErrorKind, NormalizedError};

/// Type test used by `instance_of` / `kind_of` rules.
#[derive(Clone, Copy)]
pub enum TypeCheck {
    /// Downcast test against a concrete Rust error type.
    Type { name: &'static str, check: fn(&NormalizedError) -> bool },
    /// Discriminant test against an [`ErrorKind`].
    Kind(ErrorKind),
}

impl fmt::Debug for TypeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type { name, .. } => f.debug_tuple("Type").field(name).finish(),
            Self::Kind(kind) => f.debug_tuple("Kind").field(kind).finish(),
        }
    }
}

impl TypeCheck {
    /// Matches errors whose wrapped source is an `E`.
    pub fn of<E: std::error::Error + 'static>() -> Self {
        Self::Type { name: core::any::type_name::<E>(), check: |error| error.is::<E>() }
    }

    pub fn matches(&self, error: &NormalizedError) -> bool {
        match self {
            Self::Type { check, .. } => check(error),
            Self::Kind(kind) => error.kind() == Some(*kind),
        }
    }
}

/// Rule input.
///
/// Property-scoped conditions read `property`, or the map's global property
/// when `property` is `None`. A missing or falsy value never matches.
#[derive(Debug, Clone)]
pub enum Condition {
    /// Exact, case-sensitive equality.
    Equals { message: String, property: Option<String> },
    /// Case-insensitive containment of every part.
    Includes { parts: Vec<String>, property: Option<String> },
    /// Regex test against the raw value.
    Matches { regex: Regex, property: Option<String> },
    InstanceOf(TypeCheck),
    /// Exact, case-sensitive membership.
    OneOf { values: Vec<String>, property: Option<String> },
}

impl Condition {
    /// Short label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equals { .. } => "equals",
            Self::Includes { .. } => "includes",
            Self::Matches { .. } => "matches",
            Self::InstanceOf(_) => "instance_of",
            Self::OneOf { .. } => "one_of",
        }
    }

    /// Overrides the property a property-scoped condition reads.
    ///
    /// Type checks read no property and are returned unchanged.
    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            Self::Equals { property, .. }
            | Self::Includes { property, .. }
            | Self::Matches { property, .. }
            | Self::OneOf { property, .. } => *property = Some(name.into()),
            Self::InstanceOf(_) => {},
        }
        self
    }

    /// Evaluates the condition; never fails, absent values are `false`.
    pub fn evaluate(&self, error: &NormalizedError, global_property: &str) -> bool {
        match self {
            Self::InstanceOf(check) => check.matches(error),
            Self::Equals { message, property } => {
                extract(error, property.as_deref(), global_property).is_some_and(|value| value == *message)
            },
            Self::Includes { parts, property } => {
                extract(error, property.as_deref(), global_property).is_some_and(|value| {
                    let value = value.to_lowercase();
                    parts.iter().all(|part| value.contains(&part.to_lowercase()))
                })
            },
            Self::Matches { regex, property } => {
                extract(error, property.as_deref(), global_property).is_some_and(|value| regex.is_match(&value))
            },
            Self::OneOf { values, property } => {
                extract(error, property.as_deref(), global_property).is_some_and(|value| values.contains(&value))
            },
        }
    }
}

#[inline]
fn extract(error: &NormalizedError, property: Option<&str>, global_property: &str) -> Option<String> {
    error.property(property.unwrap_or(global_property))
}
