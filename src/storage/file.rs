//! JSON file storage
//!
//! Each key is stored as `<dir>/<key>.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::models::Task;

use super::{StorageError, TaskPersistence};

/// File-backed task persistence
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store slots inside `dir` (created on first save)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl TaskPersistence for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<Task>>, StorageError> {
        let path = self.slot_path(key)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        let tasks = serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(tasks))
    }

    fn save(&self, key: &str, tasks: &[Task]) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;

        // Ensure directory exists
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&path, content).map_err(|source| StorageError::Io { path, source })?;
        log::debug!("saved {} task(s) to slot '{key}'", tasks.len());
        Ok(())
    }
}
