//! Pure API handlers
//!
//! These handlers contain the request-level logic and are HTTP-agnostic.
//! They take typed input plus the [`Session`] and return `Result<T, ApiError>`.

use crate::board::{Board, BoardStats};
use crate::drag::{DragController, DragEvent};
use crate::editor::{EditorMode, SubmitOutcome, TaskForm};
use crate::models::TaskStatus;
use crate::store::TaskStore;

use super::error::ApiError;
use super::types::{
    BoardData, CreateTaskRequest, DragData, DragStartRequest, DragTargetRequest, MoveTaskRequest,
    ReorderTaskRequest, TaskMutationData, TaskSavedData, TasksData, UpdateTaskRequest,
    parse_priority, parse_status,
};

/// Everything a request may touch
///
/// The owner (the server loop) handles one request at a time, so every
/// handler reads and writes the task sequence without interleaving.
#[derive(Debug)]
pub struct Session {
    /// The task store
    pub store: TaskStore,
    /// The drag gesture in progress, if any
    pub drag: DragController,
}

impl Session {
    /// Wrap a store with an idle drag controller
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            drag: DragController::new(),
        }
    }
}

// =============================================================================
// BOARD
// =============================================================================

/// Project the board for a search query
pub fn get_board(session: &Session, query: &str) -> Result<BoardData, ApiError> {
    let tasks = session.store.tasks();
    let board = Board::project(tasks, query);
    Ok(BoardData::from_board(&board, BoardStats::compute(tasks)))
}

/// Board header numbers
pub fn get_stats(session: &Session) -> Result<BoardStats, ApiError> {
    Ok(BoardStats::compute(session.store.tasks()))
}

// =============================================================================
// TASKS
// =============================================================================

/// List all tasks in sequence order
pub fn list_tasks(session: &Session) -> Result<TasksData, ApiError> {
    let tasks = session.store.tasks().to_vec();
    Ok(TasksData {
        total: tasks.len(),
        tasks,
    })
}

/// Get one task
pub fn get_task(session: &Session, id: &str) -> Result<TaskSavedData, ApiError> {
    session
        .store
        .get(id)
        .cloned()
        .map(|task| TaskSavedData { task })
        .ok_or_else(|| ApiError::task_not_found(id))
}

/// Create a task through the editor
pub fn create_task(
    session: &mut Session,
    req: &CreateTaskRequest,
) -> Result<TaskSavedData, ApiError> {
    let status = parse_status(req.status.as_deref())?.unwrap_or_default();
    let mut form = TaskForm::create(status);
    form.title.clone_from(&req.title);
    form.description = req.description.clone().unwrap_or_default();
    form.priority = parse_priority(req.priority.as_deref())?.unwrap_or_default();
    form.assignee = req.assignee.clone().unwrap_or_default();
    form.estimated_hours = req.estimated_hours.as_ref().map(|h| h.as_text()).unwrap_or_default();
    for label in &req.labels {
        form.add_label(label);
    }

    submit(&form, &EditorMode::Create, &mut session.store)
}

/// Edit a task through the editor
pub fn update_task(
    session: &mut Session,
    id: &str,
    req: &UpdateTaskRequest,
) -> Result<TaskSavedData, ApiError> {
    let task = session.store.get(id).ok_or_else(|| ApiError::task_not_found(id))?;
    let mut form = TaskForm::edit(task);

    if let Some(title) = &req.title {
        form.title.clone_from(title);
    }
    if let Some(description) = &req.description {
        form.description.clone_from(description);
    }
    if let Some(status) = parse_status(req.status.as_deref())? {
        form.status = status;
    }
    if let Some(priority) = parse_priority(req.priority.as_deref())? {
        form.priority = priority;
    }
    if let Some(assignee) = &req.assignee {
        form.assignee.clone_from(assignee);
    }
    if let Some(hours) = &req.estimated_hours {
        form.estimated_hours = hours.as_text();
    }
    if let Some(labels) = &req.labels {
        form.labels.clear();
        for label in labels {
            form.add_label(label);
        }
    }
    for label in &req.add_labels {
        form.add_label(label);
    }
    for label in &req.remove_labels {
        form.remove_label(label);
    }

    submit(&form, &EditorMode::Edit(id.to_string()), &mut session.store)
}

fn submit(
    form: &TaskForm,
    mode: &EditorMode,
    store: &mut TaskStore,
) -> Result<TaskSavedData, ApiError> {
    match form.submit(mode, store)? {
        SubmitOutcome::Saved(task) => Ok(TaskSavedData { task }),
        SubmitOutcome::Rejected => Err(ApiError::bad_request("Task title cannot be empty")),
        SubmitOutcome::Missing => match mode {
            EditorMode::Edit(id) => Err(ApiError::task_not_found(id)),
            EditorMode::Create => Err(ApiError::internal("Task vanished during create")),
        },
    }
}

/// Delete a task
pub fn delete_task(session: &mut Session, id: &str) -> Result<TaskMutationData, ApiError> {
    if !session.store.delete(id)? {
        return Err(ApiError::task_not_found(id));
    }
    Ok(TaskMutationData {
        id: id.to_string(),
        changed: true,
        status: None,
    })
}

/// Move a task to another column
pub fn move_task(
    session: &mut Session,
    id: &str,
    req: &MoveTaskRequest,
) -> Result<TaskMutationData, ApiError> {
    let status: TaskStatus = req.status.parse().map_err(ApiError::bad_request)?;
    if session.store.get(id).is_none() {
        return Err(ApiError::task_not_found(id));
    }
    let changed = session.store.move_status(id, status)?;
    Ok(TaskMutationData {
        id: id.to_string(),
        changed,
        status: Some(status),
    })
}

/// Reorder a task within its column
pub fn reorder_task(
    session: &mut Session,
    id: &str,
    req: ReorderTaskRequest,
) -> Result<TaskMutationData, ApiError> {
    if session.store.get(id).is_none() {
        return Err(ApiError::task_not_found(id));
    }
    let changed = session.store.reorder(id, req.index)?;
    Ok(TaskMutationData {
        id: id.to_string(),
        changed,
        status: session.store.get(id).map(|t| t.status),
    })
}

// =============================================================================
// DRAG
// =============================================================================

fn drag(session: &mut Session, event: DragEvent) -> Result<DragData, ApiError> {
    let outcome = session.drag.handle(event, &mut session.store)?;
    Ok(DragData {
        state: session.drag.state().clone(),
        outcome,
    })
}

/// Begin dragging a task
pub fn drag_start(session: &mut Session, req: &DragStartRequest) -> Result<DragData, ApiError> {
    if session.store.get(&req.id).is_none() {
        return Err(ApiError::task_not_found(&req.id));
    }
    drag(session, DragEvent::Start { id: req.id.clone() })
}

/// Pointer over a column or card
pub fn drag_over(session: &mut Session, req: &DragTargetRequest) -> Result<DragData, ApiError> {
    drag(session, DragEvent::Over { over: req.over.clone() })
}

/// Pointer released
pub fn drag_end(session: &mut Session, req: &DragTargetRequest) -> Result<DragData, ApiError> {
    drag(session, DragEvent::End { over: req.over.clone() })
}

/// Gesture aborted
pub fn drag_cancel(session: &mut Session) -> Result<DragData, ApiError> {
    drag(session, DragEvent::Cancel)
}
