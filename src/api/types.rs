//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardStats};
use crate::drag::{DragOutcome, DragState};
use crate::models::{Priority, Task, TaskStatus};

use super::error::{ApiError, ApiErrorData};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Wrap an error
    #[must_use]
    pub fn failure(error: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Hours as sent by a client: a JSON number or the raw text of an input box
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HoursInput {
    /// `"estimatedHours": 4.5`
    Number(f64),
    /// `"estimatedHours": "4.5"`
    Text(String),
}

impl HoursInput {
    /// Text form, as the editor expects it
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(t) => t.clone(),
        }
    }
}

/// Request body for creating a task
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Title (required, non-empty after trimming)
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Column to create in (defaults to `todo`)
    #[serde(default)]
    pub status: Option<String>,
    /// Priority (defaults to `medium`)
    #[serde(default)]
    pub priority: Option<String>,
    /// Assignee
    #[serde(default)]
    pub assignee: Option<String>,
    /// Estimate
    #[serde(default)]
    pub estimated_hours: Option<HoursInput>,
    /// Labels
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Request body for editing a task; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New description (empty string clears it)
    #[serde(default)]
    pub description: Option<String>,
    /// New status
    #[serde(default)]
    pub status: Option<String>,
    /// New priority
    #[serde(default)]
    pub priority: Option<String>,
    /// New assignee (empty string clears it)
    #[serde(default)]
    pub assignee: Option<String>,
    /// New estimate (empty string clears it)
    #[serde(default)]
    pub estimated_hours: Option<HoursInput>,
    /// Replace all labels
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Labels to add
    #[serde(default)]
    pub add_labels: Vec<String>,
    /// Labels to remove
    #[serde(default)]
    pub remove_labels: Vec<String>,
}

/// Request body for moving a task to another column
#[derive(Debug, Clone, Deserialize)]
pub struct MoveTaskRequest {
    /// Target status
    pub status: String,
}

/// Request body for reordering a task within its column
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReorderTaskRequest {
    /// Target index within the column
    pub index: usize,
}

/// Request body for starting a drag
#[derive(Debug, Clone, Deserialize)]
pub struct DragStartRequest {
    /// Dragged task id
    pub id: String,
}

/// Request body for drag over / drag end
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DragTargetRequest {
    /// Column id or task id under the pointer
    #[serde(default)]
    pub over: Option<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// One column with owned tasks
#[derive(Debug, Serialize)]
pub struct ColumnData {
    /// Status
    pub id: TaskStatus,
    /// Heading
    pub title: &'static str,
    /// Accent color
    pub color: &'static str,
    /// Tasks in display order
    pub tasks: Vec<Task>,
}

/// Board endpoint response data
#[derive(Debug, Serialize)]
pub struct BoardData {
    /// Search query used
    pub query: String,
    /// The five columns
    pub columns: Vec<ColumnData>,
    /// Unfiltered header numbers
    pub stats: BoardStats,
}

impl BoardData {
    /// Own a projected board
    #[must_use]
    pub fn from_board(board: &Board<'_>, stats: BoardStats) -> Self {
        Self {
            query: board.query.clone(),
            columns: board
                .columns
                .iter()
                .map(|c| ColumnData {
                    id: c.id,
                    title: c.title,
                    color: c.color,
                    tasks: c.tasks.iter().map(|t| (*t).clone()).collect(),
                })
                .collect(),
            stats,
        }
    }
}

/// Task list response data
#[derive(Debug, Serialize)]
pub struct TasksData {
    /// Number of tasks returned
    pub total: usize,
    /// Tasks in sequence order
    pub tasks: Vec<Task>,
}

/// Response for a create or edit
#[derive(Debug, Serialize)]
pub struct TaskSavedData {
    /// The saved task
    pub task: Task,
}

/// Response for delete / move / reorder
#[derive(Debug, Serialize)]
pub struct TaskMutationData {
    /// Task id
    pub id: String,
    /// Whether anything changed
    pub changed: bool,
    /// Status after the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Response for drag events
#[derive(Debug, Serialize)]
pub struct DragData {
    /// Controller state after the event
    pub state: DragState,
    /// Mutation fired by the event
    pub outcome: DragOutcome,
}

/// Parse an optional status string
pub fn parse_status(value: Option<&str>) -> Result<Option<TaskStatus>, ApiError> {
    value.map(str::parse).transpose().map_err(ApiError::bad_request)
}

/// Parse an optional priority string
pub fn parse_priority(value: Option<&str>) -> Result<Option<Priority>, ApiError> {
    value.map(str::parse).transpose().map_err(ApiError::bad_request)
}
