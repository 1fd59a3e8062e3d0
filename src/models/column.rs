//! Static column configuration
//!
//! Columns are never created or destroyed at runtime; there is exactly one
//! per [`TaskStatus`].

use serde::Serialize;

use super::task::TaskStatus;

/// Presentation data for one board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    /// The status this column collects
    pub id: TaskStatus,
    /// Column heading
    pub title: &'static str,
    /// Accent color (hex)
    pub color: &'static str,
}

/// The five board columns, left to right
pub const COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec {
        id: TaskStatus::Backlog,
        title: "Backlog",
        color: "#6B7280",
    },
    ColumnSpec {
        id: TaskStatus::Todo,
        title: "To Do",
        color: "#EF4444",
    },
    ColumnSpec {
        id: TaskStatus::InProgress,
        title: "In Progress",
        color: "#F59E0B",
    },
    ColumnSpec {
        id: TaskStatus::InReview,
        title: "In Review",
        color: "#8B5CF6",
    },
    ColumnSpec {
        id: TaskStatus::Done,
        title: "Done",
        color: "#10B981",
    },
];

impl ColumnSpec {
    /// Look up the column for a status
    #[must_use]
    pub fn for_status(status: TaskStatus) -> &'static Self {
        // COLUMNS is ordered like TaskStatus::ALL
        &COLUMNS[status as usize]
    }

    /// Resolve a column by its id string (`todo`, `in-progress`, ...)
    ///
    /// Only exact wire names match, so arbitrary task ids never collide
    /// with a column through an alias.
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Self> {
        COLUMNS.iter().find(|c| c.id.as_str() == id)
    }
}
