//! In-memory settings store.

use crate::domain::Result;
use crate::settings::backend::SettingsStore;
use serde_json::Value;
use std::collections::BTreeMap;

/// Settings store kept entirely in memory.
///
/// Useful for tests and for hosts that persist settings themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a store seeded with `value` under `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Number of top-level keys stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        tracing::trace!(key = %key, "memory store set");
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_replaces_previous_value() {
        let mut store = MemoryStore::new().with("volume", json!(3));
        store.set("volume", json!(7)).unwrap();
        assert_eq!(store.get("volume").unwrap(), Some(json!(7)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let store: MemoryStore = [("a".to_string(), json!(1)), ("b".to_string(), json!(2))]
            .into_iter()
            .collect();
        assert_eq!(store.get("b").unwrap(), Some(json!(2)));
        assert!(!store.is_empty());
    }
}
