//! Persistence for the task sequence
//!
//! The board keeps its whole state in one key-value slot: a key maps to the
//! full, ordered list of tasks. Every mutation rewrites the slot.
//!
//! Backends:
//! - `file`: one pretty-printed JSON file per key in a data directory (default)
//! - `memory`: process-local map, nothing survives exit

/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Task;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Default slot key
pub const DEFAULT_KEY: &str = "kanban-tasks";

/// Errors raised by persistence backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("io error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The slot held something that is not a task list
    #[error("corrupt task data in slot '{key}': {source}")]
    Corrupt {
        /// Slot key
        key: String,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the task list failed
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key cannot be used as a slot name
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),
}

/// Key-value persistence for the task sequence
pub trait TaskPersistence: Send + Sync {
    /// Load the task list stored under `key`, or `None` if the slot is empty
    fn load(&self, key: &str) -> Result<Option<Vec<Task>>, StorageError>;

    /// Replace the task list stored under `key`
    fn save(&self, key: &str, tasks: &[Task]) -> Result<(), StorageError>;
}

impl<P: TaskPersistence + ?Sized> TaskPersistence for std::sync::Arc<P> {
    fn load(&self, key: &str) -> Result<Option<Vec<Task>>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, tasks: &[Task]) -> Result<(), StorageError> {
        (**self).save(key, tasks)
    }
}

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// JSON files in the data directory (default)
    #[default]
    File,
    /// In-process only
    Memory,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "files" | "json" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(format!("Unknown backend: {s}. Use 'file' or 'memory'")),
        }
    }
}

/// Build the configured persistence backend
#[must_use]
pub fn open_backend(backend: Backend, data_dir: &Path) -> Box<dyn TaskPersistence> {
    match backend {
        Backend::File => Box::new(JsonFileStore::new(data_dir)),
        Backend::Memory => Box::new(MemoryStore::new()),
    }
}
