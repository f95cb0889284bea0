use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_TEMPLATE;
use crate::severity::Severity;

/// Options for creating a new [`Logger`](crate::Logger).
///
/// A pure value; nothing is validated or touched on disk until the logger is
/// constructed. All fields have defaults, and the serde representation applies
/// the same defaults so partial config files work.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoggerConfig {
    /// Logger name, used as its registry key and in formatted output.
    #[serde(default = "default_name")]
    pub name: String,

    /// Minimum severity a record must have to be emitted.
    #[serde(default)]
    pub threshold: Severity,

    /// Path of the log file. Only consulted when `file_output` is set.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// File size at which rotation occurs. Zero disables rotation.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,

    /// Number of rotated backups to retain.
    #[serde(default = "default_backup_count")]
    pub backup_count: u32,

    /// Line template; see the [`format`](crate::format) module for the
    /// recognized placeholders.
    #[serde(default = "default_format")]
    pub format: String,

    /// Whether to attach a console sink.
    #[serde(default = "default_true")]
    pub console_output: bool,

    /// Whether to attach a rotating file sink (requires `log_file`).
    #[serde(default = "default_true")]
    pub file_output: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            threshold: Severity::Info,
            log_file: None,
            max_bytes: default_max_bytes(),
            backup_count: default_backup_count(),
            format: default_format(),
            console_output: true,
            file_output: true,
        }
    }
}

fn default_name() -> String {
    "app".to_string()
}

const fn default_max_bytes() -> u64 {
    10 * 1024 * 1024
}

const fn default_backup_count() -> u32 {
    5
}

fn default_format() -> String {
    DEFAULT_TEMPLATE.to_string()
}

const fn default_true() -> bool {
    true
}
