//! Output formatting for human and JSON modes
//!
//! Every command builds one of these result structs and calls `render`,
//! which prints either human-readable text or pretty JSON.

use colored::Colorize;
use serde::Serialize;

use crate::board::{Board, BoardStats};
use crate::drag::DragOutcome;
use crate::models::{Priority, Task};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn priority_tag(priority: Priority) -> String {
    let tag = format!("{} {}", priority.icon(), priority.label());
    match priority {
        Priority::Urgent => tag.red().bold().to_string(),
        Priority::High => tag.yellow().to_string(),
        Priority::Medium | Priority::Low => tag,
    }
}

fn card_line(task: &Task) -> String {
    let mut line = format!("  {} {}  {}", task.id.dimmed(), task.title, priority_tag(task.priority));
    if let Some(assignee) = &task.assignee {
        line.push_str(&format!("  @{assignee}"));
    }
    if !task.label_list().is_empty() {
        line.push_str(&format!("  [{}]", task.label_list().join(", ")));
    }
    if let Some(hours) = task.estimated_hours {
        line.push_str(&format!("  {hours}h"));
    }
    line
}

/// A rendered board
#[derive(Debug, Serialize)]
pub struct BoardResult<'a> {
    /// The projected board
    pub board: Board<'a>,
    /// Unfiltered header numbers
    pub stats: BoardStats,
}

impl BoardResult<'_> {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!(
            "{} of {} tasks completed ({}%)",
            self.stats.completed, self.stats.total, self.stats.completion_rate
        );
        if !self.board.query.is_empty() {
            println!("Search: \"{}\" ({} match(es))", self.board.query, self.board.visible());
        }

        for column in &self.board.columns {
            println!();
            println!("{} ({})", column.title.bold(), column.tasks.len());
            if column.tasks.is_empty() {
                println!("  {}", "No tasks".dimmed());
            }
            for task in &column.tasks {
                println!("{}", card_line(task));
            }
        }
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Number of tasks listed
    pub total: usize,
    /// The tasks
    pub tasks: Vec<Task>,
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.tasks.is_empty() {
                    println!("No tasks found.");
                    return;
                }
                for task in &self.tasks {
                    println!("{}  ({})", card_line(task), task.status);
                }
                println!("\n{} task(s)", self.total);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of a show operation
#[derive(Debug, Serialize)]
pub struct TaskShowResult {
    /// Whether the task exists
    pub found: bool,
    /// Requested id
    pub id: String,
    /// The task, if found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl TaskShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let Some(task) = &self.task else {
            println!("Task not found: {}", self.id);
            return;
        };

        println!("{}", task.title.bold());
        println!("  ID:       {}", task.id);
        println!("  Status:   {}", task.status);
        println!("  Priority: {}", priority_tag(task.priority));
        if let Some(assignee) = &task.assignee {
            println!("  Assignee: {assignee}");
        }
        if let Some(hours) = task.estimated_hours {
            println!("  Estimate: {hours}h");
        }
        if !task.label_list().is_empty() {
            println!("  Labels:   {}", task.label_list().join(", "));
        }
        println!("  Created:  {}", task.created_at.to_rfc3339());
        println!("  Updated:  {}", task.updated_at.to_rfc3339());
        if let Some(description) = &task.description {
            println!("\n{description}");
        }
    }
}

/// Result of an editor submit (add / edit)
#[derive(Debug, Serialize)]
pub struct SaveResult {
    /// Whether the form was accepted
    pub saved: bool,
    /// Whether this was a new task
    pub created: bool,
    /// The saved task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    /// Reason when not saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SaveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match (&self.task, &self.reason) {
                (Some(task), _) => {
                    let verb = if self.created { "Created" } else { "Updated" };
                    println!("{verb} task: {}", task.id);
                    println!("  Title:    {}", task.title);
                    println!("  Status:   {}", task.status);
                    println!("  Priority: {}", task.priority);
                },
                (None, Some(reason)) => println!("Not saved: {reason}"),
                (None, None) => println!("Not saved."),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of replaying a drag gesture
#[derive(Debug, Serialize)]
pub struct DragResult {
    /// Dragged task id
    pub id: String,
    /// Mutations fired, in order
    pub outcomes: Vec<DragOutcome>,
}

impl DragResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let fired: Vec<&DragOutcome> =
                    self.outcomes.iter().filter(|o| **o != DragOutcome::None).collect();
                if fired.is_empty() {
                    println!("Drag of {}: no changes", self.id);
                    return;
                }
                println!("Drag of {}:", self.id);
                for outcome in fired {
                    match outcome {
                        DragOutcome::Moved { from, to, .. } => println!("  moved {from} -> {to}"),
                        DragOutcome::Reordered { status, index, .. } => {
                            println!("  reordered to position {index} in {status}");
                        },
                        DragOutcome::None => {},
                    }
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl BoardStats {
    /// Render the stats based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!(
                "{} of {} tasks completed ({}%)",
                self.completed, self.total, self.completion_rate
            ),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation changed anything
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
