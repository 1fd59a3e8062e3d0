//! Task model
//!
//! A task is a card on the board. Its status decides which column it lives in,
//! and its position in the store's sequence decides where inside that column.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A task - a unit of work on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// What needs to be done (never empty)
    pub title: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Workflow stage (the column this task is shown in)
    pub status: TaskStatus,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Who is working on it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Free-form labels, de-duplicated on entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    /// Estimated effort in hours (non-negative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    /// When this task was created
    pub created_at: DateTime<Utc>,

    /// When this task was last mutated
    pub updated_at: DateTime<Utc>,
}

/// Task status - one per board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not yet planned
    Backlog,
    /// Planned, not started
    #[default]
    Todo,
    /// Being worked on
    InProgress,
    /// Waiting for review
    InReview,
    /// Finished
    Done,
}

impl TaskStatus {
    /// All statuses in board order
    pub const ALL: [Self; 5] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::InReview,
        Self::Done,
    ];

    /// Wire name (`in-progress`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::InReview => "in-review",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "backlog" => Ok(Self::Backlog),
            "todo" | "to-do" => Ok(Self::Todo),
            "in-progress" | "inprogress" | "doing" => Ok(Self::InProgress),
            "in-review" | "inreview" | "review" => Ok(Self::InReview),
            "done" => Ok(Self::Done),
            _ => Err(format!(
                "Invalid status: {s}. Use: backlog, todo, in-progress, in-review, done"
            )),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal (default)
    #[default]
    Medium,
    /// Should be picked up soon
    High,
    /// Drop everything
    Urgent,
}

impl Priority {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    /// Icon shown next to the label
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Low => "⬇️",
            Self::Medium => "➡️",
            Self::High => "⬆️",
            Self::Urgent => "🔥",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" | "critical" => Ok(Self::Urgent),
            _ => Err(format!("Invalid priority: {s}. Use: low, medium, high, urgent")),
        }
    }
}

/// Everything a caller supplies when creating a task
///
/// The store fills in `id`, `created_at` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    /// Task title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Initial status
    #[serde(default)]
    pub status: TaskStatus,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Optional assignee
    #[serde(default)]
    pub assignee: Option<String>,
    /// Optional labels
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Optional estimate in hours
    #[serde(default)]
    pub estimated_hours: Option<f64>,
}

/// A partial update; `None` leaves the field alone
///
/// Optional task fields take `Some(None)` to clear them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskPatch {
    /// New title
    pub title: Option<String>,
    /// New description (or cleared)
    pub description: Option<Option<String>>,
    /// New status
    pub status: Option<TaskStatus>,
    /// New priority
    pub priority: Option<Priority>,
    /// New assignee (or cleared)
    pub assignee: Option<Option<String>>,
    /// New labels (or cleared)
    pub labels: Option<Option<Vec<String>>>,
    /// New estimate (or cleared)
    pub estimated_hours: Option<Option<f64>>,
}

impl TaskPatch {
    /// Merge the provided fields into `task` (timestamps are left to the caller)
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee) = self.assignee {
            task.assignee = assignee;
        }
        if let Some(labels) = self.labels {
            task.labels = labels;
        }
        if let Some(hours) = self.estimated_hours {
            task.estimated_hours = hours;
        }
    }
}

impl From<TaskFields> for TaskPatch {
    /// A full replacement of every editable field
    fn from(fields: TaskFields) -> Self {
        Self {
            title: Some(fields.title),
            description: Some(fields.description),
            status: Some(fields.status),
            priority: Some(fields.priority),
            assignee: Some(fields.assignee),
            labels: Some(fields.labels),
            estimated_hours: Some(fields.estimated_hours),
        }
    }
}

impl Task {
    /// Build a task from caller-supplied fields
    #[must_use]
    pub fn from_fields(id: String, fields: TaskFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            assignee: fields.assignee,
            labels: fields.labels,
            estimated_hours: fields.estimated_hours,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`
    ///
    /// The new value is always strictly after the previous one, even when the
    /// clock has not moved since the last mutation.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.updated_at + Duration::microseconds(1);
        self.updated_at = now.max(floor);
    }

    /// Case-insensitive match against title, description and assignee
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(&self.title)
            || self.description.as_deref().is_some_and(hit)
            || self.assignee.as_deref().is_some_and(hit)
    }

    /// Labels as a slice (empty when absent)
    #[must_use]
    pub fn label_list(&self) -> &[String] {
        self.labels.as_deref().unwrap_or_default()
    }
}
