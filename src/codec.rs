// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical record encoding.
//!
//! JSON with declaration-order fields. The encoding is stable: the same
//! logical record always serializes to the same bytes, because ledger
//! replay and validation compare proposed writes byte-for-byte.

use crate::error::{StoreError, StoreResult};
use crate::types::UsageRecord;

/// Serializes a record to its canonical byte encoding.
pub fn serialize(record: &UsageRecord) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| StoreError::CorruptRecord(e.to_string()))
}

/// Decodes canonical bytes back into a record.
///
/// Truncated or malformed input fails with `CorruptRecord`; trailing
/// garbage after the record is likewise rejected.
pub fn deserialize(bytes: &[u8]) -> StoreResult<UsageRecord> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::CorruptRecord(e.to_string()))
}
