//! Property set type shared by parsing, merging, and publishing.
//!
//! Responsibilities:
//! - Define `PropertySet`, the string-to-string mapping produced by parsing
//!   one location and by merging all locations into one aggregate.
//!
//! Does NOT handle:
//! - Parsing file content (see `format`).
//! - Writing to a property store (see `loader`).
//!
//! Invariants:
//! - `insert` and `merge` are last-write-wins: a later value for an existing
//!   key replaces the earlier one.
//! - Iteration order is deterministic (sorted by key).

use std::collections::BTreeMap;

/// An ordered mapping of property keys to values.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertySet {
    entries: BTreeMap<String, String>,
}

impl PropertySet {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair, returning any earlier value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Merge another set into this one. Entries from `other` win on collision.
    pub fn merge(&mut self, other: PropertySet) {
        self.entries.extend(other.entries);
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
