//! Drag command - replay a drag gesture through the controller

use kanban_board::drag::{DragController, DragEvent};
use kanban_board::output::{DragResult, OperationResult};

use super::Context;

/// Start a drag on `id`, pass over each target in `over`, then release on `drop`
pub fn drag(ctx: &Context, id: &str, over: &[String], drop: Option<String>) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    if store.get(id).is_none() {
        OperationResult {
            success: false,
            message: format!("Task not found: {id}"),
        }
        .render(ctx.mode);
        return Ok(());
    }

    let mut controller = DragController::new();
    let mut events = vec![DragEvent::Start { id: id.to_string() }];
    events.extend(over.iter().map(|target| DragEvent::Over {
        over: Some(target.clone()),
    }));
    // The pointer is over the drop target right before release
    if let Some(target) = &drop {
        events.push(DragEvent::Over {
            over: Some(target.clone()),
        });
    }
    events.push(DragEvent::End { over: drop });

    let mut outcomes = Vec::with_capacity(events.len());
    for event in events {
        outcomes.push(controller.handle(event, &mut store)?);
    }

    DragResult {
        id: id.to_string(),
        outcomes,
    }
    .render(ctx.mode);
    Ok(())
}
