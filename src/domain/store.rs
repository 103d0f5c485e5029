// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed configuration store.
//!
//! A `ConfigStore` maps folded keys to raw values. It remembers the order in
//! which entries were first defined and the line each came from. Once a store
//! is handed out by the builder it is read-only.

use crate::domain::{ConfigKey, ConfigValue};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// One stored parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The folded key
    pub key: ConfigKey,
    /// The raw value
    pub value: ConfigValue,
    /// The 1-based line the entry was defined on
    pub line: usize,
}

/// A case-insensitive, insertion-ordered map of configuration parameters.
///
/// # Examples
///
/// ```
/// use kvcfg::adapters::StrLineSource;
/// use kvcfg::service::StoreBuilder;
///
/// # fn main() -> kvcfg::domain::Result<()> {
/// let report = StoreBuilder::default().parse(StrLineSource::new("Host = test.com"))?;
/// let store = report.store;
///
/// assert_eq!(store.get("HOST").map(|v| v.as_str()), Some("test.com"));
/// assert!(store.contains("host"));
/// assert_eq!(store.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    entries: Vec<Entry>,
    index: HashMap<ConfigKey, usize>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry unless the key is already present.
    ///
    /// Returns `false`, leaving the existing value in place, when the key was
    /// already defined.
    pub(crate) fn insert_first(&mut self, key: ConfigKey, value: ConfigValue, line: usize) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Entry { key, value, line });
        true
    }

    /// Looks up a parameter by name. The name is folded before the lookup.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.entry(name).map(|entry| &entry.value)
    }

    /// Looks up a parameter by an already folded key.
    pub fn get_key(&self, key: &ConfigKey) -> Option<&ConfigValue> {
        self.index.get(key).map(|&i| &self.entries[i].value)
    }

    /// Looks up the full entry for a parameter name.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.index
            .get(&ConfigKey::new(name))
            .map(|&i| &self.entries[i])
    }

    /// Returns `true` if the parameter is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&ConfigKey::new(name))
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameters are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in the order they were first defined.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Iterates over the folded keys in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.entries.iter().map(|entry| &entry.key)
    }
}

impl Serialize for ConfigStore {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}
