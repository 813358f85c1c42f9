//! Free-form debugging metadata attached to an [`ErrorValue`](crate::ErrorValue).
//!
//! Context only ever grows: [`ErrorContext::merge`] overwrites keys present in
//! the patch and leaves every other key alone.

use core::fmt;
use core::ops::Index;
use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Context key under which the transformation stores the normalized cause.
pub const ORIGINAL_ERROR_KEY: &str = "originalError";
/// Context key holding the module label of the transformer that fired.
pub const TRANSFORMER_MODULE_KEY: &str = "transformerModuleName";
/// Context key set by [`ErrorValue::set_layer`](crate::ErrorValue::set_layer).
pub const LAYER_KEY: &str = "layer";

/// String-keyed map of JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorContext(BTreeMap<String, Value>);

impl ErrorContext {
    #[inline]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[inline]
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a key, returning the previous value if any.
    #[inline]
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Reads a key as a string slice.
    #[inline]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Shallow merge; keys in `patch` win.
    pub fn merge(&mut self, patch: ErrorContext) {
        self.0.extend(patch.0);
    }

    /// Stack string of the embedded `originalError`, when it carries one.
    pub fn original_stack(&self) -> Option<&str> {
        self.get(ORIGINAL_ERROR_KEY)
            .and_then(|original| original.get("stack"))
            .and_then(Value::as_str)
            .filter(|stack| !stack.is_empty())
    }

    /// Consumes the context into the JSON object it serializes to.
    pub fn into_json(self) -> Value {
        Value::Object(self.0.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ErrorContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for ErrorContext {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for ErrorContext {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorContext {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

static NULL: Value = Value::Null;

impl Index<&str> for ErrorContext {
    type Output = Value;

    /// Missing keys read as `Value::Null`, like indexing a JSON object.
    fn index(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::String(s) => write!(f, "{}={}", key, s)?,
                other => write!(f, "{}={}", key, other)?,
            }
        }
        Ok(())
    }
}
