// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! In-memory versioned ledger.
//!
//! Keeps the full version chain per key in write order. Stands in for the
//! external ledger in tests and lets the store and history reconstructor
//! be exercised against the real [`LedgerBackend`] contract.

use std::collections::BTreeMap;

use crate::key::Key;
use crate::ledger::{BackendError, LedgerBackend, VersionEntry, VersionIter};

#[derive(Default)]
pub struct MemoryLedger {
    chains: BTreeMap<Key, Vec<VersionEntry>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a deletion marker to the chain. Deletion is an external
    /// ledger operation, never issued by the store itself; this helper
    /// exists so history reconstruction over deleted keys can be tested.
    pub fn delete(&mut self, key: &Key) {
        self.chains
            .entry(key.clone())
            .or_default()
            .push(VersionEntry::Deleted);
    }

    /// Number of versions ever written under `key`, deletions included.
    pub fn version_count(&self, key: &Key) -> usize {
        self.chains.get(key).map_or(0, Vec::len)
    }
}

impl LedgerBackend for MemoryLedger {
    fn get(&self, key: &Key) -> Result<Option<Vec<u8>>, BackendError> {
        let latest = self.chains.get(key).and_then(|chain| chain.last());
        Ok(match latest {
            Some(VersionEntry::Value(bytes)) => Some(bytes.clone()),
            Some(VersionEntry::Deleted) | None => None,
        })
    }

    fn put(&mut self, key: &Key, bytes: Vec<u8>) -> Result<(), BackendError> {
        self.chains
            .entry(key.clone())
            .or_default()
            .push(VersionEntry::Value(bytes));
        Ok(())
    }

    fn enumerate_versions(&self, key: &Key) -> Result<VersionIter<'_>, BackendError> {
        let chain = self.chains.get(key).map(Vec::as_slice).unwrap_or(&[]);
        Ok(Box::new(chain.iter().cloned().map(Ok)))
    }
}
