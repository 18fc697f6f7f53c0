//! In-process history storage.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::domain::repositories::HistoryStorage;
use crate::error::PersistenceError;

/// Storage that keeps the history document in memory only.
///
/// Clones share the same document, so a clone can be used to observe what a
/// store persisted.
///
/// # Use Cases
///
/// - Sessions where no history file can be determined
/// - Tests
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStorage {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryHistoryStorage {
    pub fn new() -> Self {
        debug!("Using in-memory history storage (not persisted)");
        Self::default()
    }

    /// Creates a storage pre-filled with `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// Currently stored document.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HistoryStorage for MemoryHistoryStorage {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<(), PersistenceError> {
        *self
            .contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(contents.to_string());
        Ok(())
    }
}
