//! Capped, persisted history of successful shortenings.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::entities::{HistoryItem, ShortenResult};
use crate::domain::repositories::HistoryStorage;
use crate::error::{HistoryError, PersistenceError};

/// Maximum number of entries kept in the history.
pub const HISTORY_CAPACITY: usize = 10;

/// Most-recent-first list of past shortenings, mirrored to durable storage.
///
/// The in-memory list is the source of truth for the session. Every mutation
/// rewrites the whole document; a failed write is logged and otherwise ignored.
///
/// # Invariants
///
/// - Never holds more than [`HISTORY_CAPACITY`] items
/// - Index 0 is the most recent insertion
pub struct HistoryStore<S: HistoryStorage> {
    storage: S,
    items: Vec<HistoryItem>,
}

impl<S: HistoryStorage> HistoryStore<S> {
    /// Loads the history from `storage`.
    ///
    /// Missing, unreadable or unparseable data yields an empty history.
    pub fn load(storage: S) -> Self {
        let items = match read_items(&storage) {
            Ok(mut items) => {
                if items.len() > HISTORY_CAPACITY {
                    debug!(
                        stored = items.len(),
                        "Stored history exceeds capacity, truncating"
                    );
                    items.truncate(HISTORY_CAPACITY);
                }
                items
            }
            Err(e) => {
                warn!("Failed to load history: {}", e);
                Vec::new()
            }
        };

        debug!(count = items.len(), "History loaded");
        Self { storage, items }
    }

    /// Current entries, most recent first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a successful shortening captured now.
    pub fn add(&mut self, result: ShortenResult) -> &HistoryItem {
        self.add_at(result, Utc::now())
    }

    /// Records a successful shortening captured at `captured_at`.
    ///
    /// The new item goes to index 0; anything beyond [`HISTORY_CAPACITY`] is
    /// dropped from the end.
    pub fn add_at(&mut self, result: ShortenResult, captured_at: DateTime<Utc>) -> &HistoryItem {
        self.items
            .insert(0, HistoryItem::from_result(result, captured_at));
        self.items.truncate(HISTORY_CAPACITY);
        self.persist();

        &self.items[0]
    }

    /// Removes the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] if `index >= len()`. Nothing
    /// is changed or persisted in that case.
    pub fn remove(&mut self, index: usize) -> Result<HistoryItem, HistoryError> {
        if index >= self.items.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = write_items(&self.storage, &self.items) {
            warn!("Failed to save history: {}", e);
        }
    }
}

fn read_items<S: HistoryStorage>(storage: &S) -> Result<Vec<HistoryItem>, PersistenceError> {
    match storage.read()? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| PersistenceError::Unavailable(format!("corrupt history document: {e}"))),
        None => Ok(Vec::new()),
    }
}

fn write_items<S: HistoryStorage>(
    storage: &S,
    items: &[HistoryItem],
) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(items)
        .map_err(|e| PersistenceError::Unavailable(format!("failed to encode history: {e}")))?;
    storage.write(&raw)
}
