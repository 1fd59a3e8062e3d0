//! Task editor
//!
//! Form state for creating or editing a task. The form holds raw text the
//! way a user typed it; [`TaskForm::submit`] validates and normalizes it
//! before calling the store:
//!
//! - the title is trimmed and must not be empty
//! - empty optional text fields become absent
//! - estimated hours that do not parse as a non-negative number become absent

use serde::{Deserialize, Serialize};

use crate::models::{Priority, Task, TaskFields, TaskPatch, TaskStatus};
use crate::store::{StoreError, TaskStore};

/// Whether the form creates a new task or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// New task
    Create,
    /// Existing task with this id
    Edit(String),
}

/// Editable task form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskForm {
    /// Title text
    #[serde(default)]
    pub title: String,
    /// Description text
    #[serde(default)]
    pub description: String,
    /// Selected status
    #[serde(default)]
    pub status: TaskStatus,
    /// Selected priority
    #[serde(default)]
    pub priority: Priority,
    /// Assignee text
    #[serde(default)]
    pub assignee: String,
    /// Estimated hours, as typed
    #[serde(default)]
    pub estimated_hours: String,
    /// Labels added so far
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Result of submitting a form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Title was empty; nothing was saved and the form stays open
    Rejected,
    /// The task was created or updated
    Saved(Task),
    /// The task being edited no longer exists
    Missing,
}

impl TaskForm {
    /// Blank form for a new task in the column the user picked
    #[must_use]
    pub fn create(initial_status: TaskStatus) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: initial_status,
            priority: Priority::default(),
            assignee: String::new(),
            estimated_hours: String::new(),
            labels: Vec::new(),
        }
    }

    /// Form seeded from an existing task
    #[must_use]
    pub fn edit(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            assignee: task.assignee.clone().unwrap_or_default(),
            estimated_hours: task.estimated_hours.map(|h| h.to_string()).unwrap_or_default(),
            labels: task.labels.clone().unwrap_or_default(),
        }
    }

    /// Add a label; blank or duplicate input is ignored
    ///
    /// Returns whether the label was added.
    pub fn add_label(&mut self, input: &str) -> bool {
        let label = input.trim();
        if label.is_empty() || self.labels.iter().any(|l| l == label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    /// Remove a label
    pub fn remove_label(&mut self, label: &str) {
        self.labels.retain(|l| l != label);
    }

    /// Whether the form would be accepted
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Validate and normalize into store fields
    ///
    /// `None` when the title is empty.
    #[must_use]
    pub fn to_fields(&self) -> Option<TaskFields> {
        if !self.is_valid() {
            return None;
        }

        let mut labels: Vec<String> = Vec::new();
        for label in &self.labels {
            let label = label.trim();
            if !label.is_empty() && !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }

        Some(TaskFields {
            title: self.title.trim().to_string(),
            description: non_empty(&self.description),
            status: self.status,
            priority: self.priority,
            assignee: non_empty(&self.assignee),
            labels: (!labels.is_empty()).then_some(labels),
            estimated_hours: parse_hours(&self.estimated_hours),
        })
    }

    /// Save the form through the store
    pub fn submit(
        &self,
        mode: &EditorMode,
        store: &mut TaskStore,
    ) -> Result<SubmitOutcome, StoreError> {
        let Some(fields) = self.to_fields() else {
            log::debug!("editor submit rejected: empty title");
            return Ok(SubmitOutcome::Rejected);
        };

        match mode {
            EditorMode::Create => Ok(SubmitOutcome::Saved(store.create(fields)?)),
            EditorMode::Edit(id) => Ok(store
                .update(id, TaskPatch::from(fields))?
                .map_or(SubmitOutcome::Missing, SubmitOutcome::Saved)),
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Parse an hours estimate; blank, unparsable, negative or non-finite input is absent
#[must_use]
pub fn parse_hours(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h >= 0.0)
}
