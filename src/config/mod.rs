//! Configuration module for evemu-rs
//!
//! Tool settings live in a TOML file in the platform config directory:
//!
//! - **Linux**: `~/.config/evemu-rs/config.toml`
//! - **macOS**: `~/Library/Application Support/evemu-rs/config.toml`
//! - **Windows**: `%APPDATA%\evemu-rs\config.toml`
//!
//! Every key is optional. A missing file means defaults.
//!
//! ```toml
//! log_filter = "warn,evemu_rs=debug"
//! default_repeat_count = 2
//! report_summary = false
//! ```

use crate::error::{EvemuError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "evemu-rs";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,evemu_rs=info";

/// Repeat count used when the argument is not an integer
pub const DEFAULT_REPEAT_COUNT: i64 = 1;

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID).join(CONFIG_FILE))
}

/// Settings for the command-line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Tracing filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Fallback for an unparseable repeat count
    #[serde(default = "default_repeat_count")]
    pub default_repeat_count: i64,

    /// Print a one-line summary to stderr after a successful run
    #[serde(default = "default_true")]
    pub report_summary: bool,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_repeat_count() -> i64 {
    DEFAULT_REPEAT_COUNT
}

fn default_true() -> bool {
    true
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            default_repeat_count: DEFAULT_REPEAT_COUNT,
            report_summary: true,
        }
    }
}

impl ToolConfig {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            EvemuError::Config("Could not determine config directory".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EvemuError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Invalid config file {:?}", path)))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| EvemuError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Render config as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EvemuError::Config(format!("Failed to serialize config: {}", e)))
    }
}
