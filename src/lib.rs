//! kanban-board - a single-board kanban task engine
//!
//! The board has five fixed columns (backlog, todo, in-progress, in-review,
//! done). Tasks live in one ordered sequence that is written through to a
//! key-value persistence slot on every change. On top of the store sit a
//! pure board projection (search + column partition), a drag/reorder state
//! machine, and a task editor that validates and normalizes form input.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod board;
pub mod config;
pub mod drag;
pub mod editor;
pub mod models;
pub mod output;
pub mod paths;
pub mod seed;
pub mod storage;
pub mod store;
