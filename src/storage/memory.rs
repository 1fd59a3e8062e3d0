//! In-memory storage

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::models::Task;

use super::{StorageError, TaskPersistence};

/// Task persistence that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, Vec<Task>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `tasks` already saved under `key`
    #[must_use]
    pub fn with_slot(key: &str, tasks: Vec<Task>) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_string(), tasks);
        store
    }

    /// Snapshot of the tasks saved under `key`
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<Vec<Task>> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Task>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TaskPersistence for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<Task>>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn save(&self, key: &str, tasks: &[Task]) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), tasks.to_vec());
        Ok(())
    }
}
