//! Board command - render the columns

use kanban_board::board::{Board, BoardStats};
use kanban_board::output::BoardResult;

use super::Context;

/// Render the board, filtered by `search`
pub fn board(ctx: &Context, search: &str) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let tasks = store.tasks();

    let result = BoardResult {
        board: Board::project(tasks, search),
        stats: BoardStats::compute(tasks),
    };
    result.render(ctx.mode);
    Ok(())
}

/// Print completion stats
pub fn stats(ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    BoardStats::compute(store.tasks()).render(ctx.mode);
    Ok(())
}
