// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory reverse index
//!
//! Mirrors what an informer cache keeps for the `instanceIP` index. Writers
//! (the watch layer, or tests) insert and remove records; readers get a
//! cloned snapshot of the entries under one key.

use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use super::{instance_ip_keys, AddressIndex, IndexEntry, IndexError, BY_INSTANCE_IP_INDEX};
use crate::domain::IpInstance;

/// Thread-safe map of index key to entries, for a single named index
#[derive(Debug)]
pub struct MemoryAddressIndex {
    name: String,
    entries: RwLock<HashMap<String, Vec<IndexEntry>>>,
}

impl Default for MemoryAddressIndex {
    fn default() -> Self {
        Self::new(BY_INSTANCE_IP_INDEX)
    }
}

impl MemoryAddressIndex {
    /// Create an empty index answering to `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Build an `instanceIP` index from a set of records
    pub fn from_instances<I>(instances: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = IpInstance>,
    {
        let index = Self::default();
        for instance in instances {
            index.insert_instance(instance)?;
        }
        Ok(index)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index a record under every key its address produces.
    ///
    /// Replaces any entries already stored for the same `namespace/name`, so
    /// a re-sync or an address change never leaves a stale claim behind.
    pub fn insert_instance(&self, instance: IpInstance) -> Result<(), IndexError> {
        let keys = instance_ip_keys(&instance)?;
        let instance_key = instance.key();
        let entry = IndexEntry::from(instance);

        let mut entries = self.entries.write().map_err(|_| IndexError::Poisoned)?;
        let replaced = remove_locked(&mut entries, &instance_key);
        if replaced > 0 {
            debug!(instance = %instance_key, replaced, "replacing indexed ip instance");
        }
        for key in keys {
            debug!(key = %key, "indexing ip instance");
            entries.entry(key).or_default().push(entry.clone());
        }
        Ok(())
    }

    /// Store an arbitrary entry under `key`
    pub fn insert_entry(&self, key: impl Into<String>, entry: IndexEntry) -> Result<(), IndexError> {
        let mut entries = self.entries.write().map_err(|_| IndexError::Poisoned)?;
        entries.entry(key.into()).or_default().push(entry);
        Ok(())
    }

    /// Drop every entry for the record with this `namespace/name` key.
    ///
    /// Returns the number of entries removed.
    pub fn remove_instance(&self, instance_key: &str) -> Result<usize, IndexError> {
        let mut entries = self.entries.write().map_err(|_| IndexError::Poisoned)?;
        Ok(remove_locked(&mut entries, instance_key))
    }

    /// All keys currently present
    pub fn keys(&self) -> Result<Vec<String>, IndexError> {
        let entries = self.entries.read().map_err(|_| IndexError::Poisoned)?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// Drop entries for `instance_key` from an already locked map
fn remove_locked(entries: &mut HashMap<String, Vec<IndexEntry>>, instance_key: &str) -> usize {
    let mut removed = 0;
    entries.retain(|_, bucket| {
        let before = bucket.len();
        bucket.retain(|entry| {
            entry
                .instance()
                .map_or(true, |instance| instance.key() != instance_key)
        });
        removed += before - bucket.len();
        !bucket.is_empty()
    });
    removed
}

impl AddressIndex for MemoryAddressIndex {
    fn by_index(&self, index_name: &str, key: &str) -> Result<Vec<IndexEntry>, IndexError> {
        if index_name != self.name {
            return Err(IndexError::UnknownIndex(index_name.to_string()));
        }

        let entries = self.entries.read().map_err(|_| IndexError::Poisoned)?;
        Ok(entries.get(key).cloned().unwrap_or_default())
    }
}
