// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Versioned usage-record entity.
//!
//! # Determinism Guarantees
//! - No timestamps are sampled inside this crate: `observed_at` is always
//!   supplied by the invocation context, so independent re-executions of
//!   the same logical transaction serialize to identical bytes.
//! - Field order is declaration order under serde, so equal records always
//!   produce equal canonical bytes.

use serde::{Deserialize, Serialize};

/// Fixed three-phase metering model: every Consumption submission carries
/// exactly one reading per phase.
pub const PHASE_COUNT: usize = 3;

/// One phase's instantaneous energy-consumption sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseReading {
    #[serde(rename = "phaseID")]
    pub phase_id: u8,
    pub kwh: f64,
}

/// The versioned entity stored under one composite key.
///
/// Identity is not serialized redundantly: the ledger key already encodes
/// it, and the store API carries it alongside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Caller-supplied observation timestamp (RFC 3339 text).
    #[serde(rename = "time")]
    pub observed_at: String,
    #[serde(rename = "macID")]
    pub mac_address: String,
    #[serde(rename = "deviceTimestamp")]
    pub device_timestamp: String,
    /// Current reading set: empty after Register, exactly [`PHASE_COUNT`]
    /// entries after any successful Update.
    pub consumption: Vec<PhaseReading>,
}

impl UsageRecord {
    /// The record written by Register: every field zero-valued.
    pub fn zero() -> Self {
        Self {
            observed_at: String::new(),
            mac_address: String::new(),
            device_timestamp: String::new(),
            consumption: Vec::new(),
        }
    }
}
