//! Configuration management
//!
//! Config is stored at `~/.kanban/config.toml`. Every section and key is
//! optional; a missing file means defaults.
//!
//! ```toml
//! [storage]
//! backend = "file"
//! data_dir = "/home/me/boards"
//! key = "kanban-tasks"
//!
//! [tasks]
//! id_prefix = "KB"
//!
//! [server]
//! port = 7420
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;
use crate::storage::{Backend, DEFAULT_KEY};
use crate::store::DEFAULT_ID_PREFIX;

/// Default port for `kanban serve`
pub const DEFAULT_PORT: u16 = 7420;

/// Errors loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error on {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where tasks are persisted
    #[serde(default)]
    pub storage: StorageConfig,
    /// Task id generation
    #[serde(default)]
    pub tasks: TasksConfig,
    /// Local HTTP server
    #[serde(default)]
    pub server: ServerConfig,
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend type
    #[serde(default)]
    pub backend: Backend,
    /// Data directory (defaults to `~/.kanban/data`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Slot key
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            data_dir: None,
            key: default_key(),
        }
    }
}

/// Task id settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Prefix for generated ids (`KB` gives `KB-1`, `KB-2`, ...)
    #[serde(default = "default_prefix")]
    pub id_prefix: String,
}

fn default_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_prefix(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// TCP port
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            },
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the global config path
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&paths::global_config())
    }

    /// Effective data directory
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(paths::default_data_dir)
    }
}
