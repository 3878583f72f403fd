//! Minimal string-keyed property bag.

use indexmap::IndexMap;

use crate::value::Value;

/// The simplest possible typed bag: `has`/`get`/`set`/`remove`/`all`.
///
/// A strict subset of [`Map`](crate::Map) with no locking, no recursion and
/// no serialization surface. Useful when a handful of named values need a
/// home and the fluent container API would be overkill.
///
/// ```
/// use arraytools::PropertyHolder;
///
/// let mut bag = PropertyHolder::new();
/// bag.set("name", "john").set("age", 44);
/// assert!(bag.has("name"));
/// assert_eq!(bag.get("age").unwrap(), &44);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyHolder {
    properties: IndexMap<String, Value>,
}

impl PropertyHolder {
    /// Creates a new empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag from key-value entries.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            properties: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Returns true if the bag contains `key`.
    pub fn has(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns the value under `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns the value under `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.properties.get(key).unwrap_or(default)
    }

    /// Writes `value` under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Removes `key` if present.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.properties.shift_remove(key);
        self
    }

    /// Returns the full property mapping.
    pub fn all(&self) -> &IndexMap<String, Value> {
        &self.properties
    }
}
