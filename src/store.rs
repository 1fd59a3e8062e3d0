//! Task store
//!
//! The authoritative, ordered task sequence. Every effective mutation is
//! written through to the persistence slot in full; there is no batching
//! and no delta format.
//!
//! Order matters: tasks that share a status are shown in the column in the
//! order they appear in the sequence.

use mockable::{Clock, DefaultClock};
use thiserror::Error;

use crate::config::Config;
use crate::models::{Task, TaskFields, TaskPatch, TaskStatus};
use crate::seed;
use crate::storage::{self, StorageError, TaskPersistence};

/// Default prefix for generated task ids
pub const DEFAULT_ID_PREFIX: &str = "KB";

/// Errors raised by the task store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Loading or saving the task slot failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// The in-memory task sequence plus its persistence slot
pub struct TaskStore {
    tasks: Vec<Task>,
    persistence: Box<dyn TaskPersistence>,
    key: String,
    clock: Box<dyn Clock + Send + Sync>,
    id_prefix: String,
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("key", &self.key)
            .field("id_prefix", &self.id_prefix)
            .field("tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

impl TaskStore {
    /// Open the slot `key`, seeding it with the sample tasks if it is empty
    pub fn open(
        persistence: Box<dyn TaskPersistence>,
        key: impl Into<String>,
        clock: Box<dyn Clock + Send + Sync>,
        id_prefix: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        let id_prefix = id_prefix.into();

        let (tasks, seeded) = match persistence.load(&key)? {
            Some(tasks) => (tasks, false),
            None => (seed::sample_tasks(&id_prefix), true),
        };

        let store = Self {
            tasks,
            persistence,
            key,
            clock,
            id_prefix,
        };

        if seeded {
            log::info!("slot '{}' is empty, seeding {} sample task(s)", store.key, store.len());
            store.persist()?;
        } else {
            log::debug!("loaded {} task(s) from slot '{}'", store.len(), store.key);
        }

        Ok(store)
    }

    /// Open the store described by `config` with the wall clock
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let persistence = storage::open_backend(config.storage.backend, &config.data_dir());
        Self::open(
            persistence,
            config.storage.key.clone(),
            Box::new(DefaultClock),
            config.tasks.id_prefix.clone(),
        )
    }

    /// All tasks in sequence order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board has no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Slot key this store writes to
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a new task
    ///
    /// The title is not validated here; callers go through the editor.
    pub fn create(&mut self, fields: TaskFields) -> Result<Task, StoreError> {
        let id = self.next_id();
        let task = Task::from_fields(id, fields, self.clock.utc());
        log::debug!("create {} ({})", task.id, task.status);

        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Merge `patch` into the task with `id`
    ///
    /// Returns `None` (and writes nothing) if there is no such task.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<Option<Task>, StoreError> {
        let now = self.clock.utc();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            log::debug!("update {id}: not found");
            return Ok(None);
        };

        patch.apply_to(task);
        task.touch(now);
        let updated = task.clone();
        log::debug!("update {id}");

        self.persist()?;
        Ok(Some(updated))
    }

    /// Remove the task with `id`
    ///
    /// Returns whether a task was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            log::debug!("delete {id}: not found");
            return Ok(false);
        }

        log::debug!("delete {id}");
        self.persist()?;
        Ok(true)
    }

    /// Change a task's status without moving it in the sequence
    ///
    /// Returns whether the status actually changed.
    pub fn move_status(&mut self, id: &str, status: TaskStatus) -> Result<bool, StoreError> {
        let now = self.clock.utc();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            log::debug!("move {id}: not found");
            return Ok(false);
        };
        if task.status == status {
            return Ok(false);
        }

        log::debug!("move {id}: {} -> {status}", task.status);
        task.status = status;
        task.touch(now);

        self.persist()?;
        Ok(true)
    }

    /// Move a task to `target` within the group of tasks sharing its status
    ///
    /// The group's slots in the full sequence stay where they are; only the
    /// tasks occupying them are rotated. Tasks with other statuses keep their
    /// positions. `target` past the end of the group means "last".
    ///
    /// Returns whether the order changed.
    pub fn reorder(&mut self, id: &str, target: usize) -> Result<bool, StoreError> {
        let Some(status) = self.get(id).map(|t| t.status) else {
            log::debug!("reorder {id}: not found");
            return Ok(false);
        };

        let slots: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status == status)
            .map(|(i, _)| i)
            .collect();

        let Some(from) = slots.iter().position(|&i| self.tasks[i].id == id) else {
            return Ok(false);
        };
        let to = target.min(slots.len() - 1);
        if from == to {
            return Ok(false);
        }

        let mut group: Vec<Task> = slots.iter().map(|&i| self.tasks[i].clone()).collect();
        let moved = group.remove(from);
        group.insert(to, moved);
        group[to].touch(self.clock.utc());

        for (slot, task) in slots.into_iter().zip(group) {
            self.tasks[slot] = task;
        }

        log::debug!("reorder {id}: {status}[{from}] -> {status}[{to}]");
        self.persist()?;
        Ok(true)
    }

    /// Index of a task within its status group
    #[must_use]
    pub fn index_in_status(&self, id: &str) -> Option<usize> {
        let status = self.get(id)?.status;
        self.tasks
            .iter()
            .filter(|t| t.status == status)
            .position(|t| t.id == id)
    }

    /// Generate the next task id using the configured prefix
    ///
    /// One more than the largest trailing number among existing ids. If that
    /// number is already `u64::MAX`, the lowest unused suffix is taken instead.
    #[must_use]
    pub fn next_id(&self) -> String {
        let max_num = self
            .tasks
            .iter()
            .filter_map(|t| t.id.rsplit('-').next().and_then(|n| n.parse::<u64>().ok()))
            .max()
            .unwrap_or(0);

        if let Some(next) = max_num.checked_add(1) {
            return format!("{}-{next}", self.id_prefix);
        }

        log::warn!("id suffix space exhausted, reusing the lowest free suffix");
        let mut n: u64 = 1;
        loop {
            let id = format!("{}-{n}", self.id_prefix);
            if self.get(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.persistence.save(&self.key, &self.tasks)?;
        Ok(())
    }
}
