//! Tests for the task and column models

use chrono::Duration;
use kanban_board::models::{ColumnSpec, Priority, Task, TaskFields, TaskPatch, TaskStatus};

use crate::common::{t0, task};

// =============================================================================
// STATUS
// =============================================================================

#[test]
fn test_status_wire_names() {
    let names: Vec<_> = TaskStatus::ALL.iter().map(|s| s.to_string()).collect();
    assert_eq!(names, ["backlog", "todo", "in-progress", "in-review", "done"]);
    assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"in-progress\"");
}

#[test]
fn test_status_parse_accepts_aliases() {
    assert_eq!("todo".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
    assert_eq!("In_Progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
    assert_eq!("review".parse::<TaskStatus>().unwrap(), TaskStatus::InReview);
    assert!("archived".parse::<TaskStatus>().unwrap_err().contains("Invalid status"));
}

#[test]
fn test_status_default_is_todo() {
    assert_eq!(TaskStatus::default(), TaskStatus::Todo);
}

// =============================================================================
// PRIORITY
// =============================================================================

#[test]
fn test_priority_parse_and_order() {
    assert_eq!("URGENT".parse::<Priority>().unwrap(), Priority::Urgent);
    assert_eq!("med".parse::<Priority>().unwrap(), Priority::Medium);
    assert!("huge".parse::<Priority>().is_err());
    assert!(Priority::Low < Priority::Urgent);
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_labels() {
    assert_eq!(Priority::High.label(), "High");
    assert_eq!(Priority::Urgent.icon(), "🔥");
}

// =============================================================================
// COLUMNS
// =============================================================================

#[test]
fn test_column_lookup() {
    assert_eq!(ColumnSpec::for_status(TaskStatus::InReview).title, "In Review");
    assert_eq!(ColumnSpec::find("done").map(|c| c.id), Some(TaskStatus::Done));
    assert!(ColumnSpec::find("Done").is_none());
    assert!(ColumnSpec::find("KB-1").is_none());
}

// =============================================================================
// TASK
// =============================================================================

#[test]
fn test_task_json_is_camel_case_and_skips_absent_fields() {
    let mut t = task("KB-9", "Plan sprint", TaskStatus::Backlog);
    t.estimated_hours = Some(2.0);

    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["id"], "KB-9");
    assert_eq!(json["status"], "backlog");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["estimatedHours"], 2.0);
    assert!(json.get("createdAt").is_some());
    assert!(json.get("description").is_none());
    assert!(json.get("labels").is_none());
}

#[test]
fn test_task_json_tolerates_missing_optional_fields() {
    let raw = r#"{
        "id": "KB-1",
        "title": "Minimal",
        "status": "done",
        "createdAt": "2024-01-15T00:00:00Z",
        "updatedAt": "2024-01-15T00:00:00Z"
    }"#;
    let t: Task = serde_json::from_str(raw).unwrap();
    assert_eq!(t.status, TaskStatus::Done);
    assert_eq!(t.priority, Priority::Medium);
    assert!(t.label_list().is_empty());
}

#[test]
fn test_touch_is_strictly_increasing() {
    let mut t = task("1", "t", TaskStatus::Todo);
    t.touch(t0());
    assert_eq!(t.updated_at, t0());

    // Clock stands still
    t.touch(t0());
    assert!(t.updated_at > t0());

    // Clock goes backwards
    let before = t.updated_at;
    t.touch(t0() - Duration::hours(1));
    assert!(t.updated_at > before);
}

#[test]
fn test_from_fields_sets_both_timestamps() {
    let fields = TaskFields {
        title: "x".to_string(),
        ..TaskFields::default()
    };
    let t = Task::from_fields("KB-1".to_string(), fields, t0());
    assert_eq!(t.created_at, t0());
    assert_eq!(t.updated_at, t0());
    assert_eq!(t.status, TaskStatus::Todo);
}

#[test]
fn test_patch_only_touches_given_fields() {
    let mut t = task("1", "Old", TaskStatus::Todo);
    t.assignee = Some("Kim".to_string());

    let patch = TaskPatch {
        title: Some("New".to_string()),
        ..TaskPatch::default()
    };
    patch.apply_to(&mut t);

    assert_eq!(t.title, "New");
    assert_eq!(t.assignee.as_deref(), Some("Kim"));
}

#[test]
fn test_patch_from_fields_replaces_everything() {
    let mut t = task("1", "Old", TaskStatus::Todo);
    t.assignee = Some("Kim".to_string());

    TaskPatch::from(TaskFields {
        title: "New".to_string(),
        status: TaskStatus::Done,
        ..TaskFields::default()
    })
    .apply_to(&mut t);

    assert_eq!(t.assignee, None);
    assert_eq!(t.status, TaskStatus::Done);
}

#[test]
fn test_matches_lowercase() {
    let mut t = task("1", "Refactor Parser", TaskStatus::Todo);
    t.description = Some("Split the Lexer".to_string());
    assert!(t.matches_lowercase("parser"));
    assert!(t.matches_lowercase("lexer"));
    assert!(!t.matches_lowercase("1"));
}
