//! Argument records for the named-argument combinators.
//!
//! A [`Record`] maps field names to values and remembers insertion order, so
//! that printing and iteration follow the order in which fields were first
//! supplied.

use std::rc::Rc;

use crate::value::Value;

/// An insertion-ordered mapping from field name to value.
///
/// Equality ignores field order.
///
/// # Examples
///
/// ```rust
/// use argshape::{Record, Value, record};
///
/// let preset = record! { y: 2 };
/// let merged = preset.merge(&record! { z: 3, x: 1 });
///
/// assert_eq!(merged.get("x"), Value::from(1));
/// assert_eq!(merged.get("w"), Value::Absent);
/// assert_eq!(merged.keys().collect::<Vec<_>>(), ["y", "z", "x"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Record {
    entries: Vec<(Rc<str>, Value)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets `key` to `value`. An existing field keeps its position.
    pub fn insert(&mut self, key: impl Into<Rc<str>>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Record::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value of `key`, or absent.
    pub fn get(&self, key: &str) -> Value {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_ref() == key)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    /// Returns `true` if `key` is present, even when its value is absent.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|(existing, _)| existing.as_ref() == key)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_ref())
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_ref(), value))
    }

    /// The first field supplied, if any.
    pub fn first_entry(&self) -> Option<(Rc<str>, Value)> {
        self.entries.first().cloned()
    }

    /// Returns `self` overlaid with `later`; on collision `later` wins.
    #[must_use]
    pub fn merge(&self, later: &Self) -> Self {
        let mut merged = self.clone();
        for (key, value) in &later.entries {
            merged.insert(Rc::clone(key), value.clone());
        }
        merged
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.contains_key(key) && other.get(key) == *value)
    }
}

impl<K: Into<Rc<str>>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iterator {
            record.insert(key, value);
        }
        record
    }
}

/// Builds a [`Record`] from `name: value` pairs.
///
/// # Examples
///
/// ```rust
/// use argshape::{Value, record};
///
/// let person = record! { name: "Kyle", age: 40 };
/// assert_eq!(person.get("age"), Value::from(40));
/// assert!(record! {}.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:ident : $value:expr),+ $(,)?) => {
        $crate::Record::new()$(.with(stringify!($key), $value))+
    };
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct RecordVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map of field names to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}
