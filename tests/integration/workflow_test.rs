//! Drag and editing workflows across several invocations

use predicates::prelude::*;
use tempfile::TempDir;

use super::{column, json, kanban};

#[test]
fn test_drag_to_another_column() {
    let temp = TempDir::new().unwrap();
    kanban(temp.path())
        .args(["drag", "KB-1", "--drop", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moved todo -> done"));

    assert_eq!(column(temp.path(), "done"), ["KB-1", "KB-4"]);
}

#[test]
fn test_drag_pass_through_changes_status_twice() {
    let temp = TempDir::new().unwrap();
    let before = json(temp.path(), &["show", "KB-1"])["task"]["updatedAt"].clone();

    kanban(temp.path())
        .args(["drag", "KB-1", "--over", "in-progress", "--over", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moved todo -> in-progress"))
        .stdout(predicate::str::contains("moved in-progress -> todo"));

    let after = json(temp.path(), &["show", "KB-1"]);
    assert_eq!(after["task"]["status"], "todo");
    assert_ne!(after["task"]["updatedAt"], before);
}

#[test]
fn test_drag_onto_sibling_reorders() {
    let temp = TempDir::new().unwrap();
    kanban(temp.path()).args(["add", "Second"]).assert().success();
    kanban(temp.path()).args(["add", "Third"]).assert().success();

    kanban(temp.path())
        .args(["drag", "KB-6", "--drop", "KB-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reordered to position 0 in todo"));
    assert_eq!(column(temp.path(), "todo"), ["KB-6", "KB-1", "KB-5"]);
}

#[test]
fn test_drag_with_no_movement() {
    let temp = TempDir::new().unwrap();
    kanban(temp.path())
        .args(["drag", "KB-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drag of KB-1: no changes"));
}

#[test]
fn test_drag_unknown_task() {
    let temp = TempDir::new().unwrap();
    kanban(temp.path())
        .args(["drag", "KB-77", "--drop", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task not found: KB-77"));
}

#[test]
fn test_edit_lifecycle() {
    let temp = TempDir::new().unwrap();

    kanban(temp.path())
        .args(["edit", "KB-3", "--title", "Fix tablet layout", "-l", "tablet", "--remove-label", "mobile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task: KB-3"));

    kanban(temp.path())
        .args(["edit", "KB-3", "--assignee", "", "--hours", ""])
        .assert()
        .success();

    let shown = json(temp.path(), &["show", "KB-3"]);
    assert_eq!(shown["task"]["title"], "Fix tablet layout");
    assert_eq!(shown["task"]["labels"], serde_json::json!(["frontend", "tablet"]));
    assert!(shown["task"].get("assignee").is_none());
    assert!(shown["task"].get("estimatedHours").is_none());

    kanban(temp.path())
        .args(["edit", "KB-3", "--title", " "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not saved"));

    kanban(temp.path())
        .args(["edit", "KB-99", "--title", "Ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("task not found: KB-99"));
}
