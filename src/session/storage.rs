//! Persistent credential slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `Session` talks to a `CredentialStore`; the browser client backs it
//! with `localStorage`, the CLI with a file, tests with memory.

use std::sync::{Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("credential storage unavailable: {0}")]
    Unavailable(String),
    #[error("credential storage write failed: {0}")]
    Write(String),
}

/// A single named slot holding the bearer credential.
pub trait CredentialStore: Send + Sync {
    /// Read the persisted credential. Absent or blank means anonymous.
    fn load(&self) -> Option<String>;

    /// Persist `credential`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store rejects the write.
    fn save(&self, credential: &str) -> Result<(), StorageError>;

    /// Remove the persisted credential.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store rejects the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Process-lifetime store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_credential(credential: &str) -> Self {
        Self {
            slot: Mutex::new(Some(credential.to_owned())),
        }
    }

    /// Current raw slot contents.
    #[must_use]
    pub fn peek(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.peek().filter(|value| !value.trim().is_empty())
    }

    fn save(&self, credential: &str) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(credential.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
