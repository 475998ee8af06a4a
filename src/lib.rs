// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! usage-ledger: a deterministic, replayable record store for per-device
//! energy-usage telemetry, backed by an external versioned ledger.
//!
//! Every mutation is a single whole-record state transition: independent
//! re-executions of the same logical operation produce byte-identical
//! ledger writes. The ledger itself (ordering, commit, replication) is an
//! external collaborator reached through [`ledger::LedgerBackend`].

pub mod config;
pub mod error;
pub mod types;
pub mod key;
pub mod codec;
pub mod ledger;
pub mod adapters;
pub mod store;
pub mod history;
pub mod router;

#[cfg(test)]
pub mod tests;
