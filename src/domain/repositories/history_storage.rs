//! Storage trait for the persisted history document.

use crate::error::PersistenceError;

/// Durable storage holding the serialized history under a single key.
///
/// Implementations deal in the raw JSON document only; parsing and the
/// fail-soft policy live in [`crate::application::services::HistoryStore`].
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileHistoryStorage`] - JSON file on disk
/// - [`crate::infrastructure::storage::MemoryHistoryStorage`] - in-process, not durable
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait HistoryStorage: Send + Sync {
    /// Reads the stored document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(json))` if a document was stored
    /// - `Ok(None)` if nothing was stored yet
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the storage cannot be read.
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Replaces the stored document.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the storage cannot be written.
    fn write(&self, contents: &str) -> Result<(), PersistenceError>;
}
