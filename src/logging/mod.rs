mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

use crate::utils::data_dir;

/// Log filename used by the server.
pub const LOG_FILENAME: &str = "issue-tracker.log";

/// Configuration for the logging system.
#[derive(Debug)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

/// Default log directory (`~/.issue-tracker/logs`).
#[must_use]
pub fn default_log_dir() -> PathBuf {
    data_dir().join("logs")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
