//! Data models for the board
//!
//! - Task: a card with a status, priority and optional metadata
//! - `ColumnSpec`: static per-status column configuration

pub mod column;
pub mod task;

pub use column::{COLUMNS, ColumnSpec};
pub use task::{Priority, Task, TaskFields, TaskPatch, TaskStatus};
