//! Ordered, index-addressable sequence container.
//!
//! [`Collection`] wraps a dense sequence of [`Value`]s with a fluent,
//! chainable API: mutators return `&mut Self`, so transformation pipelines
//! read as a single expression. Indices are always the dense range
//! `0..len()`; every operation that removes or reorders elements renumbers
//! the remainder immediately.
//!
//! Besides index access, a collection carries an internal cursor for
//! step-wise iteration ([`Collection::next`] / [`Collection::previous`]),
//! independent of the data itself.
//!
//! ```
//! use arraytools::Collection;
//!
//! let mut names = Collection::from_values(["john", "kara", "phil"]);
//! names.reverse().push("rose");
//! assert_eq!(names.get(0).unwrap(), "phil");
//! assert_eq!(names.last().unwrap(), "rose");
//! ```

use std::cmp::Ordering;
use std::ops::Index;

use indexmap::IndexMap;

use crate::errors::ContainerError;
use crate::value::Value;


/// Cursor position before the first element.
fn before_first() -> i64 {
    -1
}

/// Ordered sequence container with a fluent API and an iteration cursor.
///
/// # Indexing
///
/// Reads past either end never fail: [`Collection::get`] returns `None` and
/// the `[]` operator yields a null value. The backing store stays dense, so
/// [`Collection::put`] at an index at or beyond the current length appends.
///
/// # Cursor
///
/// The cursor starts at `-1` (before the first element) and is deliberately
/// unclamped: walking past either end returns `None` while the raw position
/// keeps moving, so an equal number of steps in the opposite direction walks
/// back into range.
///
/// # Serialization
///
/// The serde representation round-trips the item sequence only; a
/// deserialized collection starts with the cursor before the first element.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Collection {
    items: Vec<Value>,
    #[serde(skip, default = "before_first")]
    pointer: i64,
}

/// Equality compares the elements only; the cursor is iteration state, not
/// data.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Collection {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pointer: before_first(),
        }
    }

    /// Creates a collection from a sequence of values.
    ///
    /// ```
    /// # use arraytools::Collection;
    /// let numbers = Collection::from_values([1, 2, 3]);
    /// assert_eq!(numbers.len(), 3);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            items: values.into_iter().map(Into::into).collect(),
            pointer: before_first(),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if `index` addresses an element, i.e. lies in `0..len()`.
    pub fn has_key(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Returns true if any element equals `value` (linear scan).
    pub fn has_value(&self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.items.contains(&value)
    }

    /// Returns the dense index range as a vector.
    pub fn keys(&self) -> Vec<usize> {
        (0..self.items.len()).collect()
    }

    /// Returns a snapshot of all values.
    pub fn values(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Removes all elements.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Returns the element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Writes `value` at `index`, overwriting any element there.
    ///
    /// An index at or beyond the current length appends; the store stays
    /// dense, gaps are never materialized.
    pub fn put(&mut self, index: usize, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if index < self.items.len() {
            self.items[index] = value;
        } else {
            self.items.push(value);
        }
        self
    }

    /// Removes the element at `index` if present and renumbers the remainder.
    pub fn remove(&mut self, index: usize) -> &mut Self {
        if index < self.items.len() {
            self.items.remove(index);
        }
        self
    }

    /// Calls `f` for each element in index order.
    ///
    /// Returning `false` from the callback stops the iteration early.
    /// Mutating the collection from within the callback is not possible; the
    /// collection is borrowed for the duration of the walk.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Value, usize) -> bool,
    {
        for (index, item) in self.items.iter().enumerate() {
            if !f(item, index) {
                break;
            }
        }
        self
    }

    /// Retains the elements for which `predicate` returns true, in their
    /// original relative order, then renumbers the survivors.
    ///
    /// ```
    /// # use arraytools::Collection;
    /// let mut numbers = Collection::from_values([1, 2, 3, 4]);
    /// numbers.filter(|n, _| n.as_int().is_some_and(|n| n % 2 == 0));
    /// assert_eq!(numbers.to_array(), Collection::from_values([2, 4]).to_array());
    /// ```
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&Value, usize) -> bool,
    {
        let mut index = 0;
        self.items.retain(|item| {
            let keep = predicate(item, index);
            index += 1;
            keep
        });
        self
    }

    /// Replaces each element in place with the result of `f`.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(Value, usize) -> Value,
    {
        for (index, slot) in self.items.iter_mut().enumerate() {
            let item = std::mem::take(slot);
            *slot = f(item, index);
        }
        self
    }

    /// Sorts the elements in place by the three-way `comparator` (stable).
    pub fn sort<F>(&mut self, mut comparator: F) -> &mut Self
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.items.sort_by(|a, b| comparator(a, b));
        self
    }

    /// Reverses the element order in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Returns the first element, or `None` when empty.
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// Returns the last element, or `None` when empty.
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Removes and returns the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Removes and returns the first element, renumbering the remainder.
    pub fn shift(&mut self) -> Option<Value> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Appends `value` at the end.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    /// Prepends `value`, shifting all elements right by one.
    ///
    /// A cursor at or past position 0 advances by one so it keeps pointing at
    /// the same logical element.
    pub fn unshift(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.insert(0, value.into());
        if self.pointer >= 0 {
            self.pointer += 1;
        }
        self
    }

    /// Inserts `value` at `index`, shifting subsequent elements right.
    ///
    /// An insertion point beyond the end is clamped to an append. The cursor
    /// advances by one when the insertion point lies at or before it.
    pub fn inject(&mut self, index: usize, value: impl Into<Value>) -> &mut Self {
        let index = index.min(self.items.len());
        self.items.insert(index, value.into());
        if index as i64 <= self.pointer {
            self.pointer += 1;
        }
        self
    }

    /// Appends all elements of `other` at the end.
    ///
    /// Accepts another [`Collection`] or any plain sequence of values.
    ///
    /// ```
    /// # use arraytools::Collection;
    /// let mut all = Collection::from_values([1, 2]);
    /// all.merge(Collection::from_values([3]))
    ///     .merge(vec![arraytools::Value::Int(4)]);
    /// assert_eq!(all.len(), 4);
    /// ```
    pub fn merge<I>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.items.extend(other.into_iter().map(Into::into));
        self
    }

    /// Keeps only the contiguous sub-range starting at `offset`, `length`
    /// elements long (to the end when `length` is `None`).
    pub fn slice(&mut self, offset: usize, length: Option<usize>) -> &mut Self {
        let start = offset.min(self.items.len());
        let mut kept = self.items.split_off(start);
        if let Some(length) = length {
            kept.truncate(length);
        }
        self.items = kept;
        self
    }

    /// Splits the elements into new collections of at most `size` elements,
    /// the last chunk possibly shorter. Does not modify `self`; a `size` of
    /// zero yields no chunks.
    ///
    /// ```
    /// # use arraytools::Collection;
    /// let numbers = Collection::from_values([1, 2, 3, 4, 5]);
    /// let chunks = numbers.chunk(2);
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks[2].len(), 1);
    /// ```
    pub fn chunk(&self, size: usize) -> Vec<Collection> {
        if size == 0 {
            return Vec::new();
        }
        self.items
            .chunks(size)
            .map(|chunk| Collection::from_values(chunk.to_vec()))
            .collect()
    }

    /// Returns the element under the cursor, or `None` when the cursor is out
    /// of range.
    pub fn current(&self) -> Option<&Value> {
        usize::try_from(self.pointer)
            .ok()
            .and_then(|index| self.items.get(index))
    }

    /// Advances the cursor by one and returns the element there.
    pub fn next(&mut self) -> Option<&Value> {
        self.pointer += 1;
        self.current()
    }

    /// Moves the cursor back by one and returns the element there.
    pub fn previous(&mut self) -> Option<&Value> {
        self.pointer -= 1;
        self.current()
    }

    /// Sets the cursor position directly. No bounds validation; the cursor
    /// may sit anywhere and out-of-range reads return `None`.
    pub fn set_pointer(&mut self, pointer: i64) -> &mut Self {
        self.pointer = pointer;
        self
    }

    /// Returns the raw cursor position.
    pub fn pointer(&self) -> i64 {
        self.pointer
    }

    /// Projects each element to a record holding only the requested fields.
    ///
    /// Elements are expected to be record-shaped (plain objects or wrapped
    /// maps). A field absent on an element is skipped for that element;
    /// elements without fields produce an empty record. Never fails.
    ///
    /// ```
    /// # use arraytools::{Collection, Value};
    /// let people = Collection::from_values([
    ///     Value::from_plain(serde_json::json!({"name": "john", "age": 44})),
    ///     Value::from_plain(serde_json::json!({"name": "kara", "age": 27})),
    /// ]);
    /// let names = people.lists(&["name"]);
    /// assert_eq!(names[1]["name"], "kara");
    /// ```
    pub fn lists(&self, keys: &[&str]) -> Vec<IndexMap<String, Value>> {
        self.items
            .iter()
            .map(|item| {
                let mut record = IndexMap::new();
                for &key in keys {
                    let field = match item {
                        Value::Object(entries) => entries.get(key),
                        Value::Map(map) => map.get(key),
                        _ => None,
                    };
                    if let Some(value) = field {
                        record.insert(key.to_string(), value.clone());
                    }
                }
                record
            })
            .collect()
    }

    /// Concatenates the string representations of all elements with
    /// `separator`.
    ///
    /// Scalars render via `Display` and null renders empty; an array-, object-
    /// or container-shaped element fails with a type mismatch.
    pub fn join(&self, separator: &str) -> crate::Result<String> {
        let mut parts = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if !item.is_scalar() {
                return Err(ContainerError::TypeMismatch {
                    expected: "scalar".to_string(),
                    actual: item.type_name().to_string(),
                }
                .into());
            }
            parts.push(item.to_string());
        }
        Ok(parts.join(separator))
    }

    /// Returns a plain snapshot of the current state.
    pub fn to_array(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Recursively converts the elements to a JSON-safe plain structure.
    ///
    /// Elements carrying their own serialization capability (wrapped
    /// containers) are dispatched to it; everything else goes through the
    /// generic plain-data projection. Operates on a copy, `self` is
    /// unaffected.
    pub fn to_serialized_array(&self) -> Vec<serde_json::Value> {
        self.items.iter().map(Value::to_plain).collect()
    }

    /// Serializes the collection to JSON text: an array of serialized
    /// elements in container order.
    ///
    /// ```
    /// # use arraytools::{Collection, Value};
    /// let mut rows = Collection::new();
    /// rows.push(Value::from_plain(serde_json::json!({"a": 1})))
    ///     .push(Value::from_plain(serde_json::json!({"a": 2})));
    /// assert_eq!(rows.to_json().unwrap(), r#"[{"a":1},{"a":2}]"#);
    /// ```
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.to_serialized_array())?)
    }

    /// Returns an independent duplicate. Mutating the copy never affects the
    /// original's own store.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Value>> for Collection {
    fn from(items: Vec<Value>) -> Self {
        Self {
            items,
            pointer: before_first(),
        }
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Non-panicking bracket access; out-of-range indices yield a null value.
impl Index<usize> for Collection {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        static NULL: Value = Value::Null;
        self.items.get(index).unwrap_or(&NULL)
    }
}
