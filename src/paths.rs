//! Centralized path definitions
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.kanban/
//! ├── config.toml          # user configuration
//! └── data/
//!     └── kanban-tasks.json   # the task slot (one file per key)
//! ```
//!
//! Both locations can be overridden from the command line
//! (`--config`, `--data-dir`) or, for the data directory, from the config file.

use std::path::PathBuf;

/// Global directory name under the user's home
const GLOBAL_DIR: &str = ".kanban";

/// Config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Data subdirectory
const DATA_DIR: &str = "data";

/// Get the global directory.
///
/// Returns `~/.kanban`.
#[must_use]
pub fn global_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.kanban/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default data directory.
///
/// Returns `~/.kanban/data`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    global_dir().join(DATA_DIR)
}
