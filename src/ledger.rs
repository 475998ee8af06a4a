// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Versioned ledger backend contract.
//!
//! The ledger collaborator owns ordering, validation, commit, replication
//! and durability. This crate consumes only three primitives: point read,
//! point write, and version-chain enumeration. The store performs its read
//! and its write inside one proposed transaction so the backend's own
//! concurrency control can detect conflicts; nothing is serialized here.

use thiserror::Error;

use crate::key::Key;

/// Failure reported by the external ledger. Opaque to the core: every
/// backend failure is terminal for the current invocation.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// One entry of a key's version chain, oldest to newest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionEntry {
    /// The bytes written at this version.
    Value(Vec<u8>),
    /// The key was deleted at this point in the chain.
    Deleted,
}

/// Iterator over a version chain. Each item may fail independently; a
/// failure mid-chain aborts the whole enumeration at the consumer.
pub type VersionIter<'a> = Box<dyn Iterator<Item = Result<VersionEntry, BackendError>> + 'a>;

/// The abstract versioned key-value backend.
pub trait LedgerBackend {
    /// Latest value under `key`, or `None` if absent (never written, or
    /// deleted at the head of its chain).
    fn get(&self, key: &Key) -> Result<Option<Vec<u8>>, BackendError>;

    /// Proposes `bytes` as the next version under `key`.
    fn put(&mut self, key: &Key, bytes: Vec<u8>) -> Result<(), BackendError>;

    /// Enumerates the full version chain for `key` in commit order.
    /// An absent key yields an empty chain.
    fn enumerate_versions(&self, key: &Key) -> Result<VersionIter<'_>, BackendError>;
}
