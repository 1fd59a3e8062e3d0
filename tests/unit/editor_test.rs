//! Tests for the task editor form

use kanban_board::editor::{EditorMode, SubmitOutcome, TaskForm, parse_hours};
use kanban_board::models::{Priority, TaskStatus};

use crate::common::Harness;

fn saved(outcome: SubmitOutcome) -> kanban_board::models::Task {
    match outcome {
        SubmitOutcome::Saved(task) => task,
        other => panic!("expected a saved task, got {other:?}"),
    }
}

// =============================================================================
// FORM STATE
// =============================================================================

#[test]
fn test_create_form_uses_requested_column() {
    let form = TaskForm::create(TaskStatus::InReview);
    assert_eq!(form.status, TaskStatus::InReview);
    assert_eq!(form.priority, Priority::Medium);
    assert!(form.title.is_empty());
    assert!(!form.is_valid());
}

#[test]
fn test_edit_form_is_seeded_from_task() {
    let h = Harness::empty_slot();
    let form = TaskForm::edit(h.store.get("KB-1").unwrap());
    assert_eq!(form.title, "Design new user onboarding flow");
    assert_eq!(form.assignee, "Sarah Chen");
    assert_eq!(form.estimated_hours, "8");
    assert_eq!(form.labels, ["design", "ux"]);
    assert_eq!(form.priority, Priority::High);
}

#[test]
fn test_add_label_trims_and_skips_duplicates() {
    let mut form = TaskForm::create(TaskStatus::Todo);
    assert!(form.add_label("  bug "));
    assert!(!form.add_label("bug"));
    assert!(!form.add_label("   "));
    assert!(form.add_label("ui"));
    assert_eq!(form.labels, ["bug", "ui"]);

    form.remove_label("bug");
    assert_eq!(form.labels, ["ui"]);
}

// =============================================================================
// NORMALIZATION
// =============================================================================

#[test]
fn test_to_fields_trims_and_drops_blanks() {
    let mut form = TaskForm::create(TaskStatus::Backlog);
    form.title = "  Ship it  ".to_string();
    form.description = "   ".to_string();
    form.assignee = " Robin ".to_string();

    let fields = form.to_fields().unwrap();
    assert_eq!(fields.title, "Ship it");
    assert_eq!(fields.description, None);
    assert_eq!(fields.assignee.as_deref(), Some("Robin"));
    assert_eq!(fields.labels, None);
    assert_eq!(fields.status, TaskStatus::Backlog);
}

#[test]
fn test_parse_hours() {
    assert_eq!(parse_hours("2.5"), Some(2.5));
    assert_eq!(parse_hours(" 3 "), Some(3.0));
    assert_eq!(parse_hours("0"), Some(0.0));
    assert_eq!(parse_hours(""), None);
    assert_eq!(parse_hours("abc"), None);
    assert_eq!(parse_hours("-1"), None);
    assert_eq!(parse_hours("NaN"), None);
    assert_eq!(parse_hours("inf"), None);
}

// =============================================================================
// SUBMIT
// =============================================================================

#[test]
fn test_submit_rejects_blank_title() {
    let mut h = Harness::abc();
    let mut form = TaskForm::create(TaskStatus::Todo);
    form.title = "   ".to_string();

    let outcome = form.submit(&EditorMode::Create, &mut h.store).unwrap();
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(h.store.len(), 3);
    assert_eq!(h.saves(), 0);
}

#[test]
fn test_submit_create_appends_task() {
    let mut h = Harness::abc();
    let mut form = TaskForm::create(TaskStatus::Done);
    form.title = "Retro".to_string();
    form.estimated_hours = "1.5".to_string();
    form.add_label("meeting");

    let task = saved(form.submit(&EditorMode::Create, &mut h.store).unwrap());
    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(task.estimated_hours, Some(1.5));
    assert_eq!(task.labels, Some(vec!["meeting".to_string()]));
    assert_eq!(h.store.len(), 4);
}

#[test]
fn test_submit_create_with_bad_hours_keeps_task() {
    let mut h = Harness::abc();
    let mut form = TaskForm::create(TaskStatus::Todo);
    form.title = "Estimate me".to_string();
    form.estimated_hours = "abc".to_string();

    let task = saved(form.submit(&EditorMode::Create, &mut h.store).unwrap());
    assert_eq!(task.estimated_hours, None);
}

#[test]
fn test_submit_edit_replaces_fields() {
    let mut h = Harness::empty_slot();
    let mut form = TaskForm::edit(h.store.get("KB-1").unwrap());
    form.description.clear();
    form.estimated_hours.clear();
    form.status = TaskStatus::InProgress;
    h.tick(10);

    let task = saved(form.submit(&EditorMode::Edit("KB-1".into()), &mut h.store).unwrap());
    assert_eq!(task.id, "KB-1");
    assert_eq!(task.description, None);
    assert_eq!(task.estimated_hours, None);
    assert_eq!(task.status, TaskStatus::InProgress);
    assert!(task.updated_at > task.created_at);
    assert_eq!(h.order(), ["KB-1", "KB-2", "KB-3", "KB-4"]);
}

#[test]
fn test_submit_edit_of_deleted_task_is_missing() {
    let mut h = Harness::abc();
    let mut form = TaskForm::edit(h.store.get("A").unwrap());
    form.title = "Too late".to_string();
    h.store.delete("A").unwrap();

    let outcome = form.submit(&EditorMode::Edit("A".into()), &mut h.store).unwrap();
    assert_eq!(outcome, SubmitOutcome::Missing);
    assert_eq!(h.store.len(), 2);
}
