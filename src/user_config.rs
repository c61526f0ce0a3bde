//! User-level configuration loaded from `~/.issue-tracker/config.toml`.
//!
//! This file is optional; if it does not exist all fields fall back to their
//! `Default` values. Command-line flags and environment variables take
//! precedence over anything set here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::utils::data_dir;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Server settings (`[server]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind, e.g. `0.0.0.0:3000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,

    /// Allowed CORS origins. Empty means the built-in defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cors_origins: Vec<String>,
}

/// Top-level user configuration.
///
/// All fields are optional at the TOML level; missing fields resolve to their
/// `Default` values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// Load the user configuration from its canonical location.
pub fn load_user_config() -> Result<UserConfig, UserConfigError> {
    load_user_config_from(&user_config_path())
}

/// Load the user configuration from `path`.
///
/// Returns `Ok(UserConfig::default())` if the file does not exist so callers
/// never need to handle the "absent file" case specially.
pub fn load_user_config_from(path: &Path) -> Result<UserConfig, UserConfigError> {
    if !path.exists() {
        debug!("User config not found at {}; using defaults", path.display());
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "user_config_tests.rs"]
mod tests;
