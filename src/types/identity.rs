// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Identity: the composite addressing tuple.

use crate::error::{StoreError, StoreResult};

/// Ordered tuple of 1–2 string components uniquely addressing one record,
/// e.g. `["device-name"]` or `["device-name", "mpan"]`.
///
/// Component order is part of the identity: `["a", "b"]` and `["b", "a"]`
/// address different records. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    components: Vec<String>,
}

impl Identity {
    pub fn new<I, S>(components: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        if components.is_empty() || components.len() > 2 {
            return Err(StoreError::InvalidIdentity(format!(
                "expected 1 or 2 components, got {}",
                components.len()
            )));
        }
        if components.iter().any(|c| c.is_empty()) {
            return Err(StoreError::InvalidIdentity(
                "empty component".to_string(),
            ));
        }
        Ok(Self { components })
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }
}
