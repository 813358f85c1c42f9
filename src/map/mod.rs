//! Declarative error maps.
//!
//! An error map is an ordered list of `(condition, action)` rules plus a
//! fallback error value. Insertion order is match priority: the first rule
//! whose condition holds decides the outcome.
//!
//! # Examples
//!
//! ```
//! use error_map::{ErrorMapBuilder, ErrorValue};
//! use regex::Regex;
//!
//! let map = ErrorMapBuilder::new(ErrorValue::internal("INTERNAL_ERROR"))
//!     .equals("User not found")
//!     .throw_string("USER_NOT_FOUND")
//!     .includes(["timeout", "connection"])
//!     .throw_error_instance(ErrorValue::network("UPSTREAM_TIMEOUT"))
//!     .matches(Regex::new(r"^User \d+ not found$").unwrap())
//!     .throw_string("USER_NOT_FOUND")
//!     .one_of(["E_LOCKED", "E_BUSY"])
//!     .on_property("code")
//!     .pass()
//!     .build();
//!
//! assert_eq!(map.rules().len(), 4);
//! assert_eq!(map.global_property(), "message");
//! ```

use std::sync::Arc;

pub mod action;
pub mod builder;
pub mod condition;

pub use action::{Action, CustomHandler};
pub use builder::{ErrorMapBuilder, ErrorMapConfig, PendingRule, DEFAULT_GLOBAL_PROPERTY};
pub use condition::{Condition, TypeCheck};

use crate::types::ErrorValue;

/// One `(input, output)` pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pub input: Condition,
    pub output: Action,
}

/// Immutable, cheaply clonable rule set produced by [`ErrorMapBuilder::build`].
#[derive(Debug, Clone)]
pub struct ErrorMap {
    rules: Arc<[Rule]>,
    global_property: Arc<str>,
    rollback_error: ErrorValue,
}

impl ErrorMap {
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn global_property(&self) -> &str {
        &self.global_property
    }

    /// Fallback template used when nothing matches.
    #[inline]
    pub fn rollback_error(&self) -> &ErrorValue {
        &self.rollback_error
    }
}
