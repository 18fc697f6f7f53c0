//! History storage implementations.
//!
//! - [`FileHistoryStorage`] - JSON document on disk
//! - [`MemoryHistoryStorage`] - in-process fallback, nothing survives the session

mod file_storage;
mod memory_storage;

pub use file_storage::{FileHistoryStorage, HISTORY_FILE_NAME};
pub use memory_storage::MemoryHistoryStorage;
