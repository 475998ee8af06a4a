// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Asset store: the state-transition logic.
//!
//! Each operation is one bounded, synchronous read/write sequence inside
//! the transaction boundary the backend supplies. A failure at any point
//! before the write leaves the version chain untouched; there is no
//! partial mutation and no internal retry.

use tracing::debug;

use crate::codec;
use crate::config::{StoreConfig, UpdateSemantics};
use crate::error::{StoreError, StoreResult};
use crate::history::{self, HistoryEntry};
use crate::key::KeyCodec;
use crate::ledger::LedgerBackend;
use crate::types::{Identity, PhaseReading, UsageRecord, PHASE_COUNT};

pub struct AssetStore<B: LedgerBackend> {
    backend: B,
    keys: KeyCodec,
    config: StoreConfig,
}

impl<B: LedgerBackend> AssetStore<B> {
    pub fn new(backend: B, config: StoreConfig) -> Self {
        let keys = KeyCodec::new(config.namespace.clone());
        Self {
            backend,
            keys,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Registers a new identity, writing the zero-valued record as the
    /// first version of its chain. Fails with `AlreadyExists` if the
    /// identity already has a live record.
    pub fn register(&mut self, identity: &Identity) -> StoreResult<UsageRecord> {
        let key = self.keys.encode(identity)?;
        debug!(identity = ?identity.components(), "register");

        if self.backend.get(&key)?.is_some() {
            return Err(StoreError::AlreadyExists);
        }

        let record = UsageRecord::zero();
        let bytes = codec::serialize(&record)?;
        self.backend.put(&key, bytes)?;
        Ok(record)
    }

    /// Replaces the record under `identity` wholesale, writing the
    /// replacement as a new version of the chain.
    ///
    /// `observed_at` is the transaction timestamp agreed on by the
    /// invocation context; it is never sampled here, so re-executions of
    /// the same logical update propose byte-identical writes.
    pub fn update(
        &mut self,
        identity: &Identity,
        observed_at: &str,
        mac_address: &str,
        device_timestamp: &str,
        readings: &[PhaseReading],
    ) -> StoreResult<UsageRecord> {
        let key = self.keys.encode(identity)?;
        debug!(identity = ?identity.components(), "update");

        let current = self.backend.get(&key)?.ok_or(StoreError::NotFound)?;
        validate_readings(readings)?;

        // The previous version must still decode, even though every field
        // of it is about to be replaced: an unreadable chain head means
        // the chain is not safe to extend.
        let _previous = codec::deserialize(&current)?;

        let record = match self.config.update_semantics {
            UpdateSemantics::Replace => UsageRecord {
                observed_at: observed_at.to_string(),
                mac_address: mac_address.to_string(),
                device_timestamp: device_timestamp.to_string(),
                consumption: readings.to_vec(),
            },
        };

        let bytes = codec::serialize(&record)?;
        self.backend.put(&key, bytes)?;
        Ok(record)
    }

    /// Returns the current (latest) version of the record.
    pub fn read(&self, identity: &Identity) -> StoreResult<UsageRecord> {
        let key = self.keys.encode(identity)?;
        debug!(identity = ?identity.components(), "read");

        let bytes = self.backend.get(&key)?.ok_or(StoreError::NotFound)?;
        codec::deserialize(&bytes)
    }

    /// Reconstructs the identity's full version chain in commit order.
    pub fn history(&self, identity: &Identity) -> StoreResult<Vec<HistoryEntry>> {
        let key = self.keys.encode(identity)?;
        debug!(identity = ?identity.components(), "history");

        history::reconstruct(&self.backend, &key)
    }
}

/// A Consumption submission is exactly one reading per phase, each with a
/// finite kwh value.
fn validate_readings(readings: &[PhaseReading]) -> StoreResult<()> {
    if readings.len() != PHASE_COUNT {
        return Err(StoreError::InvalidConsumption(format!(
            "expected {} phase readings, got {}",
            PHASE_COUNT,
            readings.len()
        )));
    }
    for reading in readings {
        if !reading.kwh.is_finite() {
            return Err(StoreError::InvalidConsumption(format!(
                "non-finite kwh for phase {}",
                reading.phase_id
            )));
        }
    }
    Ok(())
}
