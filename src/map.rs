//! Ordered map type for wireval values.
//!
//! This module provides [`ValueMap`], a wrapper around [`IndexMap`] that maintains
//! insertion order, and [`Key`], the scalar key type. Insertion order is
//! semantically meaningful for the tree codec: it determines the order in which
//! sibling elements are emitted.
//!
//! ## Why IndexMap?
//!
//! wireval uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: Entries serialize in a consistent order
//! - **Iteration order**: Entries are iterated in insertion order
//! - **Compatibility**: Easier testing and debugging with predictable output
//!
//! ## Keys
//!
//! Unlike JSON objects, a [`ValueMap`] key may be a string or an integer.
//! Integer keys survive the XML round trip through the generic `item` element
//! and its `key` attribute.
//!
//! ## Examples
//!
//! ```rust
//! use wireval::{Value, ValueMap};
//!
//! let mut map = ValueMap::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert(0, Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A map key: either a string or an integer.
///
/// Integer keys are preserved through the XML codec via the generic `item`
/// element and its `key` attribute; string keys become element names directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl Key {
    /// Returns the string form of this key if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Returns the integer form of this key if it is an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{}", s),
            Key::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Str(s) => serializer.serialize_str(s),
            Key::Int(i) => serializer.serialize_i64(*i),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer map key")
            }

            fn visit_str<E>(self, value: &str) -> Result<Key, E> {
                Ok(Key::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Key, E> {
                Ok(Key::Str(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Key, E> {
                Ok(Key::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Key, E> {
                if value <= i64::MAX as u64 {
                    Ok(Key::Int(value as i64))
                } else {
                    Ok(Key::Str(value.to_string()))
                }
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// An insertion-ordered map of scalar keys to wireval values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which the tree codec relies on for deterministic sibling ordering.
///
/// # Examples
///
/// ```rust
/// use wireval::{Key, Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert("first", Value::from(1));
/// map.insert("second", Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::from("first"), Key::from("second")]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(IndexMap<Key, crate::Value>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&crate::Value> {
        self.0.get(&key.into())
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, crate::Value> {
        self.0.iter()
    }

    /// Returns `true` if the keys are exactly the integer sequence `0..len`.
    ///
    /// A map of this shape "looks like" a list on the wire; the tree builder
    /// collapses it under the repeated-tag-name convention. The empty map is
    /// not list-shaped, so `{"a": {}}` keeps its element while `{"a": []}`
    /// vanishes.
    #[must_use]
    pub fn is_list_shaped(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .keys()
                .enumerate()
                .all(|(i, k)| k.as_int() == Some(i as i64))
    }
}

impl From<HashMap<String, crate::Value>> for ValueMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        ValueMap(map.into_iter().map(|(k, v)| (Key::Str(k), v)).collect())
    }
}

impl IntoIterator for ValueMap {
    type Item = (Key, crate::Value);
    type IntoIter = indexmap::map::IntoIter<Key, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a Key, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, Key, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Key, crate::Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (Key, crate::Value)>>(iter: T) -> Self {
        ValueMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for ValueMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = ValueMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map with string or integer keys")
            }

            fn visit_map<A>(self, mut access: A) -> Result<ValueMap, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = ValueMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<Key, crate::Value>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
