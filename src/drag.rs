//! Drag/reorder controller
//!
//! An explicit state machine over pointer-drag gestures. The event
//! dispatcher (CLI replay, HTTP handler) feeds it `start`, `over` and `end`
//! events; every mutation it performs is reported back as a [`DragOutcome`].
//!
//! Crossing into another column changes the dragged task's status right
//! away, not on release. A drag that leaves column A, passes over B and
//! comes back to A therefore fires two status changes, each with its own
//! `updated_at` bump and save.

use serde::{Deserialize, Serialize};

use crate::models::{ColumnSpec, TaskStatus};
use crate::store::{StoreError, TaskStore};

/// A gesture event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    /// Pointer picked up a task card
    Start {
        /// Id of the dragged task
        id: String,
    },
    /// Pointer moved over a column or a card (may fire repeatedly)
    Over {
        /// Column id or task id under the pointer
        #[serde(default)]
        over: Option<String>,
    },
    /// Pointer released
    End {
        /// Column id or task id under the pointer
        #[serde(default)]
        over: Option<String>,
    },
    /// Gesture aborted (escape key, pointer lost)
    Cancel,
}

/// Controller state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A task is being dragged
    Dragging {
        /// Id of the dragged task
        active: String,
    },
}

/// What a drop target resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column, by status
    Column(TaskStatus),
    /// Another task card
    Task {
        /// The card's id
        id: String,
        /// The card's status at resolution time
        status: TaskStatus,
    },
}

impl DropTarget {
    /// Resolve an `over` id: column ids first, then task ids
    #[must_use]
    pub fn resolve(over: &str, store: &TaskStore) -> Option<Self> {
        if let Some(column) = ColumnSpec::find(over) {
            return Some(Self::Column(column.id));
        }
        store.get(over).map(|t| Self::Task {
            id: t.id.clone(),
            status: t.status,
        })
    }

    /// The column this target implies
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        match self {
            Self::Column(status) | Self::Task { status, .. } => *status,
        }
    }
}

/// The mutation (if any) a transition fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragOutcome {
    /// Nothing changed
    None,
    /// The dragged task's status was changed mid-drag
    Moved {
        /// Task id
        id: String,
        /// Previous status
        from: TaskStatus,
        /// New status
        to: TaskStatus,
    },
    /// The dragged task was spliced to a new position within its column
    Reordered {
        /// Task id
        id: String,
        /// Column the reorder happened in
        status: TaskStatus,
        /// New index within the column
        index: usize,
    },
}

/// The drag state machine
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// A controller with no gesture in progress
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Id of the task being dragged, if any
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { active } => Some(active),
        }
    }

    /// Apply one event
    pub fn handle(
        &mut self,
        event: DragEvent,
        store: &mut TaskStore,
    ) -> Result<DragOutcome, StoreError> {
        match event {
            DragEvent::Start { id } => {
                self.start(id);
                Ok(DragOutcome::None)
            },
            DragEvent::Over { over } => self.over(over.as_deref(), store),
            DragEvent::End { over } => self.end(over.as_deref(), store),
            DragEvent::Cancel => {
                self.cancel();
                Ok(DragOutcome::None)
            },
        }
    }

    /// Idle -> Dragging. Restarts the gesture if one is already running.
    pub fn start(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let DragState::Dragging { active } = &self.state {
            log::warn!("drag start for {id} while dragging {active}; restarting gesture");
        }
        log::debug!("drag start {id}");
        self.state = DragState::Dragging { active: id };
    }

    /// Dragging -> Dragging. Moves the task if the pointer is over another column.
    pub fn over(
        &mut self,
        over: Option<&str>,
        store: &mut TaskStore,
    ) -> Result<DragOutcome, StoreError> {
        let Some(active) = self.active().map(ToString::to_string) else {
            log::warn!("drag over ignored: no drag in progress");
            return Ok(DragOutcome::None);
        };
        let Some(over) = over else {
            return Ok(DragOutcome::None);
        };
        let Some(current) = store.get(&active).map(|t| t.status) else {
            return Ok(DragOutcome::None);
        };
        let Some(target) = DropTarget::resolve(over, store) else {
            return Ok(DragOutcome::None);
        };

        let to = target.status();
        if to == current || !store.move_status(&active, to)? {
            return Ok(DragOutcome::None);
        }

        Ok(DragOutcome::Moved {
            id: active,
            from: current,
            to,
        })
    }

    /// Dragging -> Idle. Reorders within a column when dropped on a sibling card.
    pub fn end(
        &mut self,
        over: Option<&str>,
        store: &mut TaskStore,
    ) -> Result<DragOutcome, StoreError> {
        let DragState::Dragging { active } = std::mem::take(&mut self.state) else {
            log::warn!("drag end ignored: no drag in progress");
            return Ok(DragOutcome::None);
        };
        log::debug!("drag end {active}");

        let Some(over) = over.filter(|o| *o != active) else {
            return Ok(DragOutcome::None);
        };
        let (Some(dragged), Some(target)) = (store.get(&active), store.get(over)) else {
            return Ok(DragOutcome::None);
        };
        if dragged.status != target.status {
            return Ok(DragOutcome::None);
        }
        let status = dragged.status;

        let Some(index) = store.index_in_status(over) else {
            return Ok(DragOutcome::None);
        };
        if !store.reorder(&active, index)? {
            return Ok(DragOutcome::None);
        }

        Ok(DragOutcome::Reordered {
            id: active,
            status,
            index,
        })
    }

    /// Any state -> Idle without mutating anything
    pub fn cancel(&mut self) {
        if let Some(active) = self.active() {
            log::debug!("drag cancel {active}");
        }
        self.state = DragState::Idle;
    }
}
