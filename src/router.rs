// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Invocation router.
//!
//! Maps a named operation plus positional arguments onto the store,
//! validating shape before dispatch and folding every outcome into the
//! uniform response envelope. Dispatch is a closed enum match, so adding
//! an operation without wiring it is a compile error.

use tracing::{debug, warn};

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::history;
use crate::ledger::LedgerBackend;
use crate::store::AssetStore;
use crate::types::{Identity, PhaseReading, PHASE_COUNT};

/// The closed operation set of the invocation protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Liveness / bootstrap probe; always succeeds.
    NoOp,
    Register,
    Read,
    Update,
    History,
}

impl Operation {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "NoOp" => Some(Operation::NoOp),
            "Register" => Some(Operation::Register),
            "Read" => Some(Operation::Read),
            "Update" => Some(Operation::Update),
            "History" => Some(Operation::History),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::NoOp => "NoOp",
            Operation::Register => "Register",
            Operation::Read => "Read",
            Operation::Update => "Update",
            Operation::History => "History",
        }
    }
}

/// One call against the store: operation name plus positional arguments.
#[derive(Clone, Debug)]
pub struct Invocation {
    pub operation: String,
    pub args: Vec<String>,
}

/// Per-invocation facts agreed on outside this core.
///
/// `observed_at` is the transaction timestamp the surrounding ledger
/// context fixed for this invocation. Passing it in, rather than sampling
/// a clock here, is what keeps independent re-executions byte-identical.
#[derive(Clone, Debug)]
pub struct InvocationContext {
    pub observed_at: String,
}

/// Uniform response envelope. Callers distinguish outcomes only by the
/// envelope kind: success carries raw payload bytes, failure carries a
/// human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Success(Vec<u8>),
    Failure(String),
}

impl Response {
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    fn from_result(result: StoreResult<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => Response::Success(payload),
            Err(e) => Response::Failure(e.to_string()),
        }
    }
}

pub struct Router<B: LedgerBackend> {
    store: AssetStore<B>,
}

impl<B: LedgerBackend> Router<B> {
    pub fn new(store: AssetStore<B>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &AssetStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AssetStore<B> {
        &mut self.store
    }

    /// Parses, validates and dispatches one invocation.
    pub fn invoke(&mut self, invocation: &Invocation, context: &InvocationContext) -> Response {
        let Some(operation) = Operation::parse(&invocation.operation) else {
            warn!(operation = %invocation.operation, "unknown operation");
            return Response::Failure(format!(
                "not a valid operation: {}",
                invocation.operation
            ));
        };
        debug!(operation = operation.name(), args = invocation.args.len(), "dispatch");

        Response::from_result(self.dispatch(operation, &invocation.args, context))
    }

    fn dispatch(
        &mut self,
        operation: Operation,
        args: &[String],
        context: &InvocationContext,
    ) -> StoreResult<Vec<u8>> {
        let identity_arity = self.store.config().identity_arity.component_count();
        let expected = match operation {
            Operation::NoOp => 0,
            Operation::Register | Operation::Read | Operation::History => identity_arity,
            Operation::Update => identity_arity + 2 + PHASE_COUNT,
        };
        if args.len() != expected {
            return Err(StoreError::ArityError {
                operation: operation.name(),
                expected,
                actual: args.len(),
            });
        }

        match operation {
            Operation::NoOp => Ok(Vec::new()),
            Operation::Register => {
                let identity = Identity::new(args.iter().cloned())?;
                let record = self.store.register(&identity)?;
                codec::serialize(&record)
            }
            Operation::Read => {
                let identity = Identity::new(args.iter().cloned())?;
                let record = self.store.read(&identity)?;
                codec::serialize(&record)
            }
            Operation::Update => {
                let identity = Identity::new(args[..identity_arity].iter().cloned())?;
                let mac_address = &args[identity_arity];
                let device_timestamp = &args[identity_arity + 1];
                let readings = parse_readings(&args[identity_arity + 2..])?;
                let record = self.store.update(
                    &identity,
                    &context.observed_at,
                    mac_address,
                    device_timestamp,
                    &readings,
                )?;
                codec::serialize(&record)
            }
            Operation::History => {
                let identity = Identity::new(args.iter().cloned())?;
                let entries = self.store.history(&identity)?;
                history::render_json(&entries)
            }
        }
    }
}

/// Each consumption argument is one JSON-encoded phase reading, e.g.
/// `{"phaseID":0,"kwh":1.2}`.
fn parse_readings(args: &[String]) -> StoreResult<Vec<PhaseReading>> {
    args.iter()
        .map(|arg| {
            serde_json::from_str::<PhaseReading>(arg)
                .map_err(|e| StoreError::InvalidConsumption(e.to_string()))
        })
        .collect()
}
