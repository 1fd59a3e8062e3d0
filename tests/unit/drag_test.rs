//! Tests for the drag/reorder controller
//!
//! Gestures are fed event by event; assertions look at the outcome of each
//! event, the resulting task order and the number of writes.

use kanban_board::drag::{DragController, DragEvent, DragOutcome, DragState, DropTarget};
use kanban_board::models::TaskStatus;

use crate::common::{Harness, task};

fn start(c: &mut DragController, h: &mut Harness, id: &str) -> DragOutcome {
    c.handle(DragEvent::Start { id: id.to_string() }, &mut h.store).unwrap()
}

fn over(c: &mut DragController, h: &mut Harness, target: &str) -> DragOutcome {
    c.handle(
        DragEvent::Over {
            over: Some(target.to_string()),
        },
        &mut h.store,
    )
    .unwrap()
}

fn end(c: &mut DragController, h: &mut Harness, target: Option<&str>) -> DragOutcome {
    c.handle(
        DragEvent::End {
            over: target.map(ToString::to_string),
        },
        &mut h.store,
    )
    .unwrap()
}

fn mixed() -> Harness {
    Harness::with_tasks(vec![
        task("A", "a", TaskStatus::Todo),
        task("B", "b", TaskStatus::Done),
        task("C", "c", TaskStatus::Done),
    ])
}

// =============================================================================
// STATE
// =============================================================================

#[test]
fn test_start_enters_dragging_without_writing() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    assert_eq!(c.state(), &DragState::Idle);

    assert_eq!(start(&mut c, &mut h, "A"), DragOutcome::None);
    assert_eq!(c.active(), Some("A"));
    assert_eq!(h.saves(), 0);
}

#[test]
fn test_end_always_returns_to_idle() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    start(&mut c, &mut h, "A");
    assert_eq!(end(&mut c, &mut h, None), DragOutcome::None);
    assert_eq!(c.state(), &DragState::Idle);
}

#[test]
fn test_cancel_discards_gesture() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    start(&mut c, &mut h, "A");
    c.handle(DragEvent::Cancel, &mut h.store).unwrap();

    assert_eq!(c.active(), None);
    assert_eq!(end(&mut c, &mut h, Some("C")), DragOutcome::None);
    assert_eq!(h.order(), ["A", "B", "C"]);
    assert_eq!(h.saves(), 0);
}

#[test]
fn test_events_while_idle_are_ignored() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    assert_eq!(over(&mut c, &mut h, "done"), DragOutcome::None);
    assert_eq!(end(&mut c, &mut h, Some("B")), DragOutcome::None);
    assert_eq!(h.column(TaskStatus::Todo), ["A", "B", "C"]);
    assert_eq!(h.saves(), 0);
}

#[test]
fn test_second_start_restarts_gesture() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    start(&mut c, &mut h, "A");
    start(&mut c, &mut h, "B");
    assert_eq!(c.active(), Some("B"));
}

// =============================================================================
// DROP TARGETS
// =============================================================================

#[test]
fn test_resolve_prefers_columns_then_tasks() {
    let h = mixed();
    assert_eq!(DropTarget::resolve("done", &h.store), Some(DropTarget::Column(TaskStatus::Done)));
    assert_eq!(
        DropTarget::resolve("B", &h.store),
        Some(DropTarget::Task {
            id: "B".to_string(),
            status: TaskStatus::Done,
        })
    );
    assert_eq!(DropTarget::resolve("nowhere", &h.store), None);
}

// =============================================================================
// OVER: LIVE STATUS CHANGES
// =============================================================================

#[test]
fn test_over_column_moves_immediately() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    start(&mut c, &mut h, "A");

    let outcome = over(&mut c, &mut h, "done");
    assert_eq!(
        outcome,
        DragOutcome::Moved {
            id: "A".to_string(),
            from: TaskStatus::Todo,
            to: TaskStatus::Done,
        }
    );
    assert_eq!(h.column(TaskStatus::Done), ["A"]);
    assert_eq!(h.saves(), 1);
}

#[test]
fn test_over_task_adopts_that_tasks_column() {
    let mut h = mixed();
    let mut c = DragController::new();
    start(&mut c, &mut h, "A");
    over(&mut c, &mut h, "C");
    assert_eq!(h.store.get("A").unwrap().status, TaskStatus::Done);
}

#[test]
fn test_over_own_column_or_unknown_target_does_nothing() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    start(&mut c, &mut h, "A");
    assert_eq!(over(&mut c, &mut h, "todo"), DragOutcome::None);
    assert_eq!(over(&mut c, &mut h, "B"), DragOutcome::None);
    assert_eq!(over(&mut c, &mut h, "ghost"), DragOutcome::None);
    assert_eq!(
        c.handle(DragEvent::Over { over: None }, &mut h.store).unwrap(),
        DragOutcome::None
    );
    assert_eq!(h.saves(), 0);
}

#[test]
fn test_pass_through_drag_flips_status_twice() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    let before = h.store.get("A").unwrap().updated_at;

    start(&mut c, &mut h, "A");
    h.tick(1);
    let first = over(&mut c, &mut h, "in-progress");
    let mid = h.store.get("A").unwrap().updated_at;
    h.tick(1);
    let second = over(&mut c, &mut h, "todo");
    let after = h.store.get("A").unwrap().updated_at;
    end(&mut c, &mut h, Some("todo"));

    assert!(matches!(first, DragOutcome::Moved { to: TaskStatus::InProgress, .. }));
    assert!(matches!(second, DragOutcome::Moved { to: TaskStatus::Todo, .. }));
    assert_eq!(h.store.get("A").unwrap().status, TaskStatus::Todo);
    assert_eq!(h.saves(), 2);
    assert!(before < mid && mid < after);
}

// =============================================================================
// END: IN-COLUMN REORDER
// =============================================================================

#[test]
fn test_drop_on_sibling_reorders_to_its_index() {
    let mut h = Harness::abc();
    let mut c = DragController::new();
    start(&mut c, &mut h, "A");

    let outcome = end(&mut c, &mut h, Some("C"));
    assert_eq!(
        outcome,
        DragOutcome::Reordered {
            id: "A".to_string(),
            status: TaskStatus::Todo,
            index: 2,
        }
    );
    assert_eq!(h.order(), ["B", "C", "A"]);
    assert_eq!(h.saves(), 1);
}

#[test]
fn test_drop_on_self_or_column_does_not_reorder() {
    let mut h = Harness::abc();
    let mut c = DragController::new();

    start(&mut c, &mut h, "B");
    assert_eq!(end(&mut c, &mut h, Some("B")), DragOutcome::None);

    start(&mut c, &mut h, "B");
    assert_eq!(end(&mut c, &mut h, Some("todo")), DragOutcome::None);

    assert_eq!(h.order(), ["A", "B", "C"]);
    assert_eq!(h.saves(), 0);
}

#[test]
fn test_cross_column_drag_then_drop_on_card() {
    let mut h = mixed();
    let mut c = DragController::new();

    start(&mut c, &mut h, "A");
    over(&mut c, &mut h, "B");
    let outcome = end(&mut c, &mut h, Some("B"));

    assert_eq!(
        outcome,
        DragOutcome::Reordered {
            id: "A".to_string(),
            status: TaskStatus::Done,
            index: 1,
        }
    );
    assert_eq!(h.column(TaskStatus::Done), ["B", "A", "C"]);
    assert_eq!(h.saves(), 2);
}

#[test]
fn test_drop_on_card_in_other_column_without_over_does_nothing() {
    let mut h = mixed();
    let mut c = DragController::new();
    start(&mut c, &mut h, "A");
    assert_eq!(end(&mut c, &mut h, Some("B")), DragOutcome::None);
    assert_eq!(h.store.get("A").unwrap().status, TaskStatus::Todo);
}

#[test]
fn test_drag_event_wire_format() {
    let event: DragEvent = serde_json::from_str(r#"{"event":"over","over":"done"}"#).unwrap();
    assert_eq!(
        event,
        DragEvent::Over {
            over: Some("done".to_string())
        }
    );
    let cancel: DragEvent = serde_json::from_str(r#"{"event":"cancel"}"#).unwrap();
    assert_eq!(cancel, DragEvent::Cancel);
}
