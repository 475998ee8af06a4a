// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Composite-key codec.
//!
//! Maps an [`Identity`] to the opaque ledger key for its version chain.
//! The encoding is injective: components are delimiter-separated with a
//! byte excluded from the key alphabet, so `("ab","c")` and `("a","bc")`
//! land on distinct keys, and component order is significant.

use crate::error::{StoreError, StoreResult};
use crate::types::Identity;

/// Separator byte for composite keys. Forbidden inside namespace and
/// identity components.
const DELIMITER: char = '\u{0000}';

/// Opaque ledger lookup key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(String);

impl Key {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Deterministic Identity -> Key encoder for one entity namespace.
///
/// The namespace is injected configuration, not process-global state, so
/// incompatible schema variants can coexist on one ledger under distinct
/// namespaces.
#[derive(Clone, Debug)]
pub struct KeyCodec {
    namespace: String,
}

impl KeyCodec {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Encodes an identity into its composite key:
    /// `\0 namespace \0 component \0` per component.
    ///
    /// Total and injective over valid identities. Fails with
    /// `InvalidIdentity` if any component is empty or contains the
    /// delimiter byte.
    pub fn encode(&self, identity: &Identity) -> StoreResult<Key> {
        if self.namespace.contains(DELIMITER) {
            return Err(StoreError::InvalidIdentity(
                "namespace contains delimiter byte".to_string(),
            ));
        }
        let mut key = String::with_capacity(self.namespace.len() + 2);
        key.push(DELIMITER);
        key.push_str(&self.namespace);
        key.push(DELIMITER);
        for component in identity.components() {
            if component.is_empty() {
                return Err(StoreError::InvalidIdentity(
                    "empty component".to_string(),
                ));
            }
            if component.contains(DELIMITER) {
                return Err(StoreError::InvalidIdentity(format!(
                    "component {:?} contains delimiter byte",
                    component
                )));
            }
            key.push_str(component);
            key.push(DELIMITER);
        }
        Ok(Key(key))
    }
}
