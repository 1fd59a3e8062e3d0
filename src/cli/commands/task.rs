//! Task commands - add, edit, show, list, remove, move, reorder

use kanban_board::board;
use kanban_board::editor::{EditorMode, SubmitOutcome, TaskForm};
use kanban_board::models::{Priority, TaskStatus};
use kanban_board::output::{OperationResult, SaveResult, TaskListResult, TaskShowResult};

use super::Context;

/// Arguments of `kanban add`
#[derive(Debug)]
pub struct NewTask {
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub hours: Option<String>,
    pub labels: Vec<String>,
}

/// Arguments of `kanban edit`; `None` keeps the current value
#[derive(Debug)]
pub struct TaskEdits {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub hours: Option<String>,
    pub add_labels: Vec<String>,
    pub remove_labels: Vec<String>,
}

fn render_submit(ctx: &Context, outcome: SubmitOutcome, created: bool, id: Option<&str>) {
    let result = match outcome {
        SubmitOutcome::Saved(task) => SaveResult {
            saved: true,
            created,
            task: Some(task),
            reason: None,
        },
        SubmitOutcome::Rejected => SaveResult {
            saved: false,
            created,
            task: None,
            reason: Some("title cannot be empty".to_string()),
        },
        SubmitOutcome::Missing => SaveResult {
            saved: false,
            created,
            task: None,
            reason: Some(format!("task not found: {}", id.unwrap_or_default())),
        },
    };
    result.render(ctx.mode);
}

/// Create a task through the editor
pub fn add(ctx: &Context, new: NewTask) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;

    let mut form = TaskForm::create(new.status);
    form.title = new.title;
    form.priority = new.priority;
    form.description = new.description.unwrap_or_default();
    form.assignee = new.assignee.unwrap_or_default();
    form.estimated_hours = new.hours.unwrap_or_default();
    for label in &new.labels {
        form.add_label(label);
    }

    let outcome = form.submit(&EditorMode::Create, &mut store)?;
    render_submit(ctx, outcome, true, None);
    Ok(())
}

/// Edit a task through the editor
pub fn edit(ctx: &Context, id: &str, edits: TaskEdits) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;

    let Some(task) = store.get(id) else {
        render_submit(ctx, SubmitOutcome::Missing, false, Some(id));
        return Ok(());
    };
    let mut form = TaskForm::edit(task);

    if let Some(title) = edits.title {
        form.title = title;
    }
    if let Some(status) = edits.status {
        form.status = status;
    }
    if let Some(priority) = edits.priority {
        form.priority = priority;
    }
    if let Some(description) = edits.description {
        form.description = description;
    }
    if let Some(assignee) = edits.assignee {
        form.assignee = assignee;
    }
    if let Some(hours) = edits.hours {
        form.estimated_hours = hours;
    }
    for label in &edits.add_labels {
        form.add_label(label);
    }
    for label in &edits.remove_labels {
        form.remove_label(label);
    }

    let outcome = form.submit(&EditorMode::Edit(id.to_string()), &mut store)?;
    render_submit(ctx, outcome, false, Some(id));
    Ok(())
}

/// Show one task
pub fn show(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let task = store.get(id).cloned();

    TaskShowResult {
        found: task.is_some(),
        id: id.to_string(),
        task,
    }
    .render(ctx.mode);
    Ok(())
}

/// List tasks in sequence order
pub fn list(ctx: &Context, status: Option<TaskStatus>, search: &str) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let tasks: Vec<_> = board::filter(store.tasks(), search)
        .filter(|t| status.is_none_or(|s| t.status == s))
        .cloned()
        .collect();

    TaskListResult {
        total: tasks.len(),
        tasks,
    }
    .render(ctx.mode);
    Ok(())
}

/// Delete a task
pub fn remove(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let removed = store.delete(id)?;

    OperationResult {
        success: removed,
        message: if removed {
            format!("Removed: {id}")
        } else {
            format!("Task not found: {id}")
        },
    }
    .render(ctx.mode);
    Ok(())
}

/// Move a task to another column
pub fn move_task(ctx: &Context, id: &str, status: TaskStatus) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let exists = store.get(id).is_some();
    let moved = store.move_status(id, status)?;

    let message = match (exists, moved) {
        (false, _) => format!("Task not found: {id}"),
        (true, true) => format!("Moved {id} to {status}"),
        (true, false) => format!("{id} is already in {status}"),
    };
    OperationResult {
        success: moved,
        message,
    }
    .render(ctx.mode);
    Ok(())
}

/// Move a task to a position within its column
pub fn reorder(ctx: &Context, id: &str, index: usize) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let Some(status) = store.get(id).map(|t| t.status) else {
        OperationResult {
            success: false,
            message: format!("Task not found: {id}"),
        }
        .render(ctx.mode);
        return Ok(());
    };

    let changed = store.reorder(id, index)?;
    let position = store.index_in_status(id).unwrap_or(index);
    OperationResult {
        success: changed,
        message: if changed {
            format!("Moved {id} to position {position} in {status}")
        } else {
            format!("{id} is already at position {position} in {status}")
        },
    }
    .render(ctx.mode);
    Ok(())
}
