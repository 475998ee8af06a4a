pub mod store_tests;

use crate::key::Key;
use crate::ledger::{BackendError, LedgerBackend, VersionEntry, VersionIter};

/// Backend fake whose primitives can be made to fail on demand.
pub struct FailingLedger {
    pub inner: crate::adapters::memory::MemoryLedger,
    pub fail_get: bool,
    pub fail_put: bool,
    pub fail_enumerate: bool,
    /// Fail mid-chain: the iterator yields this many entries, then an error.
    pub fail_after: Option<usize>,
}

impl FailingLedger {
    pub fn wrapping(inner: crate::adapters::memory::MemoryLedger) -> Self {
        Self {
            inner,
            fail_get: false,
            fail_put: false,
            fail_enumerate: false,
            fail_after: None,
        }
    }
}

impl LedgerBackend for FailingLedger {
    fn get(&self, key: &Key) -> Result<Option<Vec<u8>>, BackendError> {
        if self.fail_get {
            return Err(BackendError::new("get refused"));
        }
        self.inner.get(key)
    }

    fn put(&mut self, key: &Key, bytes: Vec<u8>) -> Result<(), BackendError> {
        if self.fail_put {
            return Err(BackendError::new("put refused"));
        }
        self.inner.put(key, bytes)
    }

    fn enumerate_versions(&self, key: &Key) -> Result<VersionIter<'_>, BackendError> {
        if self.fail_enumerate {
            return Err(BackendError::new("enumerate refused"));
        }
        let versions = self.inner.enumerate_versions(key)?;
        match self.fail_after {
            None => Ok(versions),
            Some(n) => {
                let truncated: Vec<Result<VersionEntry, BackendError>> = versions
                    .take(n)
                    .chain(core::iter::once(Err(BackendError::new("chain torn"))))
                    .collect();
                Ok(Box::new(truncated.into_iter()))
            }
        }
    }
}
