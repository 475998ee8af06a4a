// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! History reconstruction.
//!
//! Renders a key's version chain as a structured, ordered result. The
//! chain is consumed once, oldest to newest; any failure mid-enumeration
//! aborts the whole operation rather than returning a silently truncated
//! list.

use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::key::Key;
use crate::ledger::{LedgerBackend, VersionEntry};
use crate::types::UsageRecord;

/// One version of the chain. Deletion markers carry no value.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub is_deleted: bool,
    pub value: Option<UsageRecord>,
}

/// Reads the full version chain for `key` in commit order.
///
/// Each recorded version becomes one entry. A backend failure or an
/// undecodable version ends the operation with `HistoryUnavailable`,
/// discarding any partial output.
pub fn reconstruct<B: LedgerBackend>(backend: &B, key: &Key) -> StoreResult<Vec<HistoryEntry>> {
    let versions = backend
        .enumerate_versions(key)
        .map_err(|e| StoreError::HistoryUnavailable(e.to_string()))?;

    let mut entries = Vec::new();
    for version in versions {
        let version = version.map_err(|e| StoreError::HistoryUnavailable(e.to_string()))?;
        entries.push(match version {
            VersionEntry::Deleted => HistoryEntry {
                is_deleted: true,
                value: None,
            },
            VersionEntry::Value(bytes) => {
                let record = crate::codec::deserialize(&bytes)
                    .map_err(|e| StoreError::HistoryUnavailable(e.to_string()))?;
                HistoryEntry {
                    is_deleted: false,
                    value: Some(record),
                }
            }
        });
    }
    Ok(entries)
}

#[derive(Serialize)]
struct RenderedEntry<'a> {
    #[serde(rename = "Value")]
    value: Rendered<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Rendered<'a> {
    Record(&'a UsageRecord),
    Marker(&'static str),
}

/// Renders entries as the invocation payload: a JSON array of
/// `{"Value": <record>}` objects in version order, with deletions
/// rendered as `{"Value": "Deleted"}`.
pub fn render_json(entries: &[HistoryEntry]) -> StoreResult<Vec<u8>> {
    let rendered: Vec<RenderedEntry<'_>> = entries
        .iter()
        .map(|entry| RenderedEntry {
            value: match &entry.value {
                Some(record) => Rendered::Record(record),
                None => Rendered::Marker("Deleted"),
            },
        })
        .collect();
    serde_json::to_vec(&rendered).map_err(|e| StoreError::HistoryUnavailable(e.to_string()))
}
