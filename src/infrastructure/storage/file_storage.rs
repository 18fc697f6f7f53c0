//! History storage backed by a JSON file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::repositories::HistoryStorage;
use crate::error::PersistenceError;

/// File name of the history document inside the data directory.
pub const HISTORY_FILE_NAME: &str = "shortifier_history.json";

/// Storage that keeps the history document in a single file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash never leaves a half-written document behind. Missing
/// parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileHistoryStorage {
    path: PathBuf,
}

impl FileHistoryStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data dir>/shortifier/shortifier_history.json`.
    ///
    /// Returns `None` if the platform has no data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("shortifier").join(HISTORY_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| HISTORY_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HistoryStorage for FileHistoryStorage {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No history file yet");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), bytes = contents.len(), "History saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileHistoryStorage::new(dir.path().join(HISTORY_FILE_NAME));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = FileHistoryStorage::new(dir.path().join(HISTORY_FILE_NAME));

        storage.write(r#"[{"a":1}]"#).unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some(r#"[{"a":1}]"#));

        storage.write("[]").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("[]"));
        assert!(!storage.temp_path().exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("history.json");
        let storage = FileHistoryStorage::new(&path);

        storage.write("[]").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unreadable_path_is_error() {
        let dir = TempDir::new().unwrap();
        let storage = FileHistoryStorage::new(dir.path());
        assert!(storage.read().is_err());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let storage = FileHistoryStorage::new("/data/shortifier/history.json");
        assert_eq!(
            storage.temp_path(),
            PathBuf::from("/data/shortifier/history.json.tmp")
        );
    }
}
