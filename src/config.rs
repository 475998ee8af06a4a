// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Store configuration.

/// Default composite-key namespace for the usage-record entity type.
///
/// Incompatible schema variants must use distinct namespaces so their
/// version chains never interleave on the same ledger.
pub const DEFAULT_NAMESPACE: &str = "ngp.Consumption";

/// Number of identity components addressing one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityArity {
    /// Device name only.
    Single,
    /// Device name plus meter identifier (MPAN).
    Dual,
}

impl IdentityArity {
    pub fn component_count(self) -> usize {
        match self {
            IdentityArity::Single => 1,
            IdentityArity::Dual => 2,
        }
    }
}

/// Mutation policy for Update.
///
/// Replace is the only supported policy: every successful Update writes a
/// complete new record version with the previous consumption set fully
/// overwritten. An append policy would grow the consumption list without
/// bound, violating the fixed three-phase model after the first update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateSemantics {
    Replace,
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub namespace: String,
    pub identity_arity: IdentityArity,
    pub update_semantics: UpdateSemantics,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            identity_arity: IdentityArity::Dual,
            update_semantics: UpdateSemantics::Replace,
        }
    }
}
