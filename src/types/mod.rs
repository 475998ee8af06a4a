// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Core data types.

pub mod identity;
pub mod record;

pub use identity::Identity;
pub use record::{PhaseReading, UsageRecord, PHASE_COUNT};
