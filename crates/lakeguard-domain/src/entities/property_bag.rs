//! String property bag attached to every entity
//!
//! Catalogs expose table properties as arbitrary string key/value pairs.
//! Validators never index the map directly; they go through the accessors
//! here so that missing keys and case-insensitive flag comparison are handled
//! in one place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unordered string → string metadata (keys are case-sensitive)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    entries: BTreeMap<String, String>,
}

impl PropertyBag {
    /// Create an empty property bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw value of a property
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the key is present at all (even with an empty value)
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether the property is present, non-empty and equal to `expected`
    /// ignoring ASCII case
    pub fn has_value(&self, key: &str, expected: &str) -> bool {
        self.get(key)
            .filter(|value| !value.is_empty())
            .is_some_and(|value| value.eq_ignore_ascii_case(expected))
    }

    /// Iterate over properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag has no properties
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
