//! Board view model
//!
//! A pure projection from the task sequence and a search query to the five
//! board columns. Nothing here is stored; callers re-project after every
//! change.

use serde::Serialize;

use crate::models::{COLUMNS, ColumnSpec, Task, TaskStatus};

/// One projected column
#[derive(Debug, Clone, Serialize)]
pub struct Column<'a> {
    /// Status this column collects
    pub id: TaskStatus,
    /// Column heading
    pub title: &'static str,
    /// Accent color (hex)
    pub color: &'static str,
    /// Matching tasks, in sequence order
    pub tasks: Vec<&'a Task>,
}

impl Column<'_> {
    const fn empty(column: &ColumnSpec) -> Self {
        Self {
            id: column.id,
            title: column.title,
            color: column.color,
            tasks: Vec::new(),
        }
    }
}

/// The projected board: always exactly five columns
#[derive(Debug, Clone, Serialize)]
pub struct Board<'a> {
    /// The query this board was filtered with
    pub query: String,
    /// Columns in board order
    pub columns: Vec<Column<'a>>,
}

impl<'a> Board<'a> {
    /// Filter `tasks` by `query` and partition them into columns
    #[must_use]
    pub fn project(tasks: &'a [Task], query: &str) -> Self {
        let mut columns: Vec<Column<'a>> = COLUMNS.iter().map(Column::empty).collect();

        for task in filter(tasks, query) {
            // COLUMNS is ordered like TaskStatus::ALL
            columns[task.status as usize].tasks.push(task);
        }

        Self {
            query: query.to_string(),
            columns,
        }
    }

    /// The column for `status`
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &Column<'a> {
        &self.columns[status as usize]
    }

    /// Number of tasks left after filtering
    #[must_use]
    pub fn visible(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// Tasks whose title, description or assignee contains `query`
///
/// Matching is case-insensitive; an empty query keeps everything.
pub fn filter<'a>(tasks: &'a [Task], query: &str) -> impl Iterator<Item = &'a Task> {
    let needle = query.to_lowercase();
    tasks.iter().filter(move |t| t.matches_lowercase(&needle))
}

/// Header numbers for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    /// All tasks, unfiltered
    pub total: usize,
    /// Tasks in `done`
    pub completed: usize,
    /// `completed / total` as a rounded percentage (0 when empty)
    pub completion_rate: u32,
}

impl BoardStats {
    /// Compute stats over the full sequence
    #[must_use]
    pub fn compute(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
        let completion_rate = if total == 0 {
            0
        } else {
            // Integer round-half-up of 100 * completed / total
            u32::try_from((completed * 200 + total) / (total * 2)).unwrap_or(100)
        };

        Self {
            total,
            completed,
            completion_rate,
        }
    }
}
