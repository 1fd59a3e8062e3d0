//! HTTP-agnostic API layer
//!
//! Typed request/response structures and handlers that any HTTP server
//! adapter (the bundled `tiny_http` one, or another) can call.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: typed input and a [`Session`], `Result<T, ApiError>` out
//! - **Types are framework-agnostic**: no HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    Session, create_task, delete_task, drag_cancel, drag_end, drag_over, drag_start, get_board,
    get_stats, get_task, list_tasks, move_task, reorder_task, update_task,
};
pub use types::{
    ApiResponse, BoardData, ColumnData, CreateTaskRequest, DragData, DragStartRequest,
    DragTargetRequest, HoursInput, MoveTaskRequest, ReorderTaskRequest, TaskMutationData,
    TaskSavedData, TasksData, UpdateTaskRequest,
};
