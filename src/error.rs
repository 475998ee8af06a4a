// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::ledger::BackendError;

/// Closed failure taxonomy for one invocation.
///
/// Every failure is terminal for the current invocation: nothing is retried
/// internally and nothing is swallowed. The router renders each variant's
/// `Display` text into the failure envelope, which is the only diagnostic
/// surface the protocol carries.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),
    #[error("incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    ArityError {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("asset already exists")]
    AlreadyExists,
    #[error("empty asset")]
    NotFound,
    #[error("invalid consumption submission: {0}")]
    InvalidConsumption(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
    #[error("history unavailable: {0}")]
    HistoryUnavailable(String),
    #[error("backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),
}

pub type StoreResult<T> = core::result::Result<T, StoreError>;
