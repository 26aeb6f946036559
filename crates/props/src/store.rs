//! Property stores the loader publishes into.
//!
//! Responsibilities:
//! - Define the `PropertyStore` seam: existence check plus conditional set.
//! - Provide `ProcessPropertyStore`, the process-wide global registry.
//! - Provide `MemoryPropertyStore`, an isolated store for embedding and tests.
//!
//! Does NOT handle:
//! - Deciding which keys to write (see `loader`).
//!
//! Invariants:
//! - `set_if_absent` never replaces an existing value; it reports whether a
//!   write happened.
//! - No operation removes entries; stores only grow.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{OnceLock, RwLock};

/// A key/value registry the loader publishes resolved properties into.
///
/// The loader only ever performs reads and conditional writes through this
/// trait, so the process-wide global stays behind an abstraction that an
/// in-memory store can stand in for.
pub trait PropertyStore {
    /// Return the current value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value` only if the key has no value yet.
    ///
    /// Returns `true` if the value was written, `false` if an existing value
    /// was kept.
    fn set_if_absent(&self, key: &str, value: &str) -> bool;

    /// Whether the store already holds a value for `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

static PROCESS_PROPERTIES: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();

fn process_table() -> &'static RwLock<HashMap<String, String>> {
    PROCESS_PROPERTIES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Handle to the process-wide property table.
///
/// The table is lazily initialized and lives for the rest of the process.
/// Loading is expected to run once at startup, before concurrent readers
/// exist; the internal lock only satisfies the static's safety requirements.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessPropertyStore;

impl PropertyStore for ProcessPropertyStore {
    fn get(&self, key: &str) -> Option<String> {
        let table = process_table().read().unwrap_or_else(|e| e.into_inner());
        table.get(key).cloned()
    }

    fn set_if_absent(&self, key: &str, value: &str) -> bool {
        let mut table = process_table().write().unwrap_or_else(|e| e.into_inner());
        match table.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}

/// An isolated in-memory property store.
///
/// Behaves like the process-wide store but shares nothing with it, which is
/// what tests and embedders composing their own registry want.
#[derive(Debug, Default)]
pub struct MemoryPropertyStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a value, bypassing the absent check.
    pub fn preset(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.into(), value.into());
    }

    /// Number of entries currently in the store.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set_if_absent(&self, key: &str, value: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        match entries.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_if_absent_writes_once() {
        let store = MemoryPropertyStore::new();
        assert!(store.set_if_absent("foo", "bar"));
        assert!(!store.set_if_absent("foo", "other"));
        assert_eq!(store.get("foo"), Some("bar".to_string()));
    }

    #[test]
    fn test_preset_value_is_never_replaced() {
        let store = MemoryPropertyStore::new();
        store.preset("foo", "existing");
        assert!(!store.set_if_absent("foo", "bar"));
        assert_eq!(store.get("foo"), Some("existing".to_string()));
    }

    #[test]
    fn test_contains_follows_get() {
        let store = MemoryPropertyStore::new();
        assert!(!store.contains("foo"));
        store.preset("foo", "bar");
        assert!(store.contains("foo"));
    }

    #[test]
    fn test_process_store_is_shared_between_handles() {
        // Keys are namespaced to this test; the table is process-global.
        let a = ProcessPropertyStore;
        let b = ProcessPropertyStore;
        assert!(a.set_if_absent("app_props.store_tests.shared", "1"));
        assert!(!b.set_if_absent("app_props.store_tests.shared", "2"));
        assert_eq!(
            b.get("app_props.store_tests.shared"),
            Some("1".to_string())
        );
    }
}
