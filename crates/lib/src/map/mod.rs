//! String-keyed associative container.
//!
//! [`Map`] stores [`Value`]s under string keys, preserving insertion order
//! for iteration. Two construction-time modes, fixed for the instance's
//! lifetime via [`MapOptions`]:
//!
//! * **Locked key set** (`keys_locked`): writes to absent keys are rejected,
//!   and removal nulls a key's value instead of deleting the key.
//! * **Recursive wrapping** (`recursive`): nested plain data is lifted into
//!   containers — list-shaped values become
//!   [`Collection`](crate::Collection)s, record-shaped values become nested
//!   `Map`s carrying the same options.
//!
//! ```
//! use arraytools::Map;
//!
//! let mut settings = Map::new();
//! settings.set("host", "localhost").unwrap();
//! settings.set("port", 8080).unwrap();
//! assert_eq!(settings.to_json().unwrap(), r#"{"host":"localhost","port":8080}"#);
//! ```

use std::ops::Index;

use indexmap::IndexMap;

use crate::collection::Collection;
use crate::errors::ContainerError;
use crate::value::Value;


/// Construction-time configuration for a [`Map`].
///
/// Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapOptions {
    /// Reject writes to keys that were not present at construction; removal
    /// nulls values instead of deleting keys.
    pub keys_locked: bool,
    /// Recursively wrap nested array-shaped values into containers.
    pub recursive: bool,
}

/// String-keyed associative container with insertion-order iteration.
///
/// # Reads
///
/// Absent keys never fail: [`Map::get`] returns `None`, [`Map::has`] returns
/// `false`, and the `[]` operator yields a null value.
///
/// # Serialization
///
/// The serde representation — and the [`Map::to_bytes`]/[`Map::from_bytes`]
/// byte-stream built on it — round-trips the property mapping only. A decoded
/// map is unlocked and non-recursive.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Map {
    properties: IndexMap<String, Value>,
    #[serde(skip)]
    options: MapOptions,
}

impl Map {
    /// Creates a new empty map with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map from key-value entries with default options.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_options(entries, MapOptions::default())
    }

    /// Creates a map from key-value entries with the given options.
    ///
    /// With `recursive` enabled, every entry value is run through an explicit
    /// recursive wrap: plain arrays become [`Collection`]s, record-shaped
    /// objects become nested `Map`s carrying the same options, and objects
    /// whose keys are the contiguous range `"0".."n-1"` count as list-shaped.
    ///
    /// ```
    /// # use arraytools::{Map, MapOptions, Value};
    /// let map = Map::with_options(
    ///     [("persons", Value::from_plain(serde_json::json!(["Luke", "Lea"])))],
    ///     MapOptions { recursive: true, ..Default::default() },
    /// );
    /// assert!(map.get("persons").unwrap().as_collection().is_some());
    /// ```
    pub fn with_options<K, V, I>(entries: I, options: MapOptions) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let properties = entries
            .into_iter()
            .map(|(key, value)| {
                let value = value.into();
                let value = if options.recursive {
                    wrap_value(value, options)
                } else {
                    value
                };
                (key.into(), value)
            })
            .collect();
        Self {
            properties,
            options,
        }
    }

    /// Returns the construction-time options of this map.
    pub fn options(&self) -> MapOptions {
        self.options
    }

    /// Returns true if the map contains `key`.
    pub fn has(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns true if every given key is present.
    pub fn has_keys<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter().all(|key| self.has(key.as_ref()))
    }

    /// Returns the value under `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns the value under `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.properties.get(key).unwrap_or(default)
    }

    /// Returns a mutable reference to the value under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.properties.get_mut(key)
    }

    /// Writes `value` under `key`.
    ///
    /// On a map with a locked key set, writing to an absent key fails with
    /// [`ContainerError::UnknownKey`] without mutating state.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> crate::Result<&mut Self> {
        let key = key.into();
        if self.options.keys_locked && !self.has(&key) {
            tracing::debug!(key = %key, "rejected write to unknown key on locked map");
            return Err(ContainerError::UnknownKey { key }.into());
        }
        self.properties.insert(key, value.into());
        Ok(self)
    }

    /// Removes `key` if present.
    ///
    /// On a locked map the key survives with a null value; otherwise the key
    /// is deleted and the insertion order of the remaining keys is kept.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.options.keys_locked {
            if let Some(slot) = self.properties.get_mut(key) {
                *slot = Value::Null;
            }
        } else {
            self.properties.shift_remove(key);
        }
        self
    }

    /// Returns a new map holding all entries except the given keys.
    ///
    /// The result has default options and preserves this map's key order.
    pub fn except(&self, keys: &[&str]) -> Map {
        Map {
            properties: self
                .properties
                .iter()
                .filter(|(key, _)| !keys.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            options: MapOptions::default(),
        }
    }

    /// Returns a new map holding only the given keys.
    ///
    /// The result has default options and preserves this map's key order.
    pub fn only(&self, keys: &[&str]) -> Map {
        Map {
            properties: self
                .properties
                .iter()
                .filter(|(key, _)| keys.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            options: MapOptions::default(),
        }
    }

    /// Overlays `entries` onto this map, overwriting on key conflict.
    ///
    /// Existing keys keep their position, new keys are appended in the
    /// source's order. Accepts another [`Map`] or any key-value sequence.
    /// Writes go directly to the backing store and are not subject to the key
    /// lock.
    pub fn merge<K, V, I>(&mut self, entries: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.properties.insert(key.into(), value.into());
        }
        self
    }

    /// Calls `f` for each entry in insertion order.
    ///
    /// Returning `false` from the callback stops the iteration early.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&str, &Value) -> bool,
    {
        for (key, value) in &self.properties {
            if !f(key, value) {
                break;
            }
        }
        self
    }

    /// Replaces each value in place with the result of `f`.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&str, Value) -> Value,
    {
        for (key, slot) in self.properties.iter_mut() {
            let value = std::mem::take(slot);
            *slot = f(key, value);
        }
        self
    }

    /// Empties the map.
    ///
    /// On a locked map every key survives with a null value.
    pub fn clear(&mut self) -> &mut Self {
        if self.options.keys_locked {
            for slot in self.properties.values_mut() {
                *slot = Value::Null;
            }
        } else {
            self.properties.clear();
        }
        self
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns all keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    /// Returns an independent duplicate. Mutating the copy never affects the
    /// original's own store.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the coarse runtime type tag of the value under `key`,
    /// `"null"` when absent.
    ///
    /// ```
    /// # use arraytools::Map;
    /// let mut map = Map::new();
    /// map.set("name", "john").unwrap();
    /// assert_eq!(map.get_type("name"), "string");
    /// assert_eq!(map.get_type("missing"), "null");
    /// ```
    pub fn get_type(&self, key: &str) -> &'static str {
        self.get(key).map(Value::type_name).unwrap_or("null")
    }

    /// Returns a plain snapshot of the property mapping.
    pub fn to_array(&self) -> IndexMap<String, Value> {
        self.properties.clone()
    }

    /// Recursively converts the entries to a JSON-safe plain structure,
    /// dispatching to nested containers' own serialization.
    pub fn to_serialized_array(&self) -> serde_json::Map<String, serde_json::Value> {
        self.properties
            .iter()
            .map(|(key, value)| (key.clone(), value.to_plain()))
            .collect()
    }

    /// Serializes the map to JSON text: an object whose key order is the
    /// insertion order, values recursively serialized.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.to_serialized_array())?)
    }

    /// Encodes the property mapping to an opaque byte stream.
    ///
    /// Unlike [`Map::to_json`], this round-trips values exactly, preserving
    /// the distinction between plain and wrapped nested structures. The
    /// options are not carried.
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.properties)?)
    }

    /// Decodes a map from a byte stream produced by [`Map::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        Ok(Self {
            properties: serde_json::from_slice(bytes)?,
            options: MapOptions::default(),
        })
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.properties.iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            properties: iter.into_iter().collect(),
            options: MapOptions::default(),
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Non-panicking bracket access; absent keys yield a null value.
impl Index<&str> for Map {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.properties.get(key).unwrap_or(&NULL)
    }
}

/// Recursively lifts plain nested data into containers.
///
/// Plain arrays and list-shaped objects become [`Collection`]s, other objects
/// become [`Map`]s carrying the same options. Scalars and already wrapped
/// containers pass through unchanged.
fn wrap_value(value: Value, options: MapOptions) -> Value {
    match value {
        Value::Array(items) => {
            tracing::trace!(len = items.len(), "wrapping list-shaped value as collection");
            Value::from(Collection::from_values(
                items.into_iter().map(|item| wrap_value(item, options)),
            ))
        }
        Value::Object(entries) => {
            if is_list_shaped(&entries) {
                tracing::trace!(len = entries.len(), "wrapping list-shaped value as collection");
                Value::from(Collection::from_values(
                    entries.into_values().map(|item| wrap_value(item, options)),
                ))
            } else {
                Value::from(Map::with_options(entries, options))
            }
        }
        other => other,
    }
}

/// A record counts as list-shaped when its keys are exactly the contiguous
/// zero-based integer range `"0".."n-1"`.
fn is_list_shaped(entries: &IndexMap<String, Value>) -> bool {
    entries
        .keys()
        .enumerate()
        .all(|(index, key)| *key == index.to_string())
}
