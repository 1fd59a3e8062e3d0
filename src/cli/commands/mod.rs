//! Command implementations

mod board;
mod drag;
#[cfg(feature = "ui")]
mod serve;
mod task;

pub use board::{board, stats};
pub use drag::drag;
#[cfg(feature = "ui")]
pub use serve::serve;
pub use task::{NewTask, TaskEdits, add, edit, list, move_task, remove, reorder, show};

use kanban_board::config::Config;
use kanban_board::output::OutputMode;
use kanban_board::store::TaskStore;

/// Shared state for one CLI invocation
#[derive(Debug)]
pub struct Context {
    /// Effective configuration (file + flags)
    pub config: Config,
    /// Output mode
    pub mode: OutputMode,
}

impl Context {
    /// Bundle config and output mode
    pub const fn new(config: Config, mode: OutputMode) -> Self {
        Self { config, mode }
    }

    /// Open the configured task store
    pub fn open_store(&self) -> anyhow::Result<TaskStore> {
        Ok(TaskStore::from_config(&self.config)?)
    }
}
