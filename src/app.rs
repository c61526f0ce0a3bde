use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cors::{normalize_origins, DEFAULT_CORS_ORIGINS};
use crate::logging::default_log_dir;
use crate::user_config::UserConfig;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Issue Tracker - In-memory issue tracker with a JSON REST API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to (default: 127.0.0.1:3000)
    #[arg(short, long, env = "ISSUE_TRACKER_ADDR")]
    pub addr: Option<String>,
    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins (not recommended for production).
    /// Example: --cors-origins=https://app.example.com,http://localhost:5180
    #[arg(long, env = "ISSUE_TRACKER_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "ISSUE_TRACKER_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "ISSUE_TRACKER_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,
    /// Custom log directory (default: ~/.issue-tracker/logs)
    #[arg(long, env = "ISSUE_TRACKER_LOG_DIR")]
    pub log_dir: Option<String>,
}

/// Effective server settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub cors_origins: Vec<String>,
}

impl Args {
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .as_ref()
            .map_or_else(default_log_dir, PathBuf::from)
    }

    /// Resolve settings: flags and env first, then the user config, then defaults.
    pub fn server_settings(
        &self,
        user_cfg: &UserConfig,
    ) -> Result<ServerSettings, std::net::AddrParseError> {
        let addr = self
            .addr
            .as_deref()
            .or(user_cfg.server.addr.as_deref())
            .unwrap_or(DEFAULT_ADDR)
            .parse()?;

        let mut cors_origins = normalize_origins(&self.cors_origins);
        if cors_origins.is_empty() {
            cors_origins = normalize_origins(&user_cfg.server.cors_origins);
        }
        if cors_origins.is_empty() {
            cors_origins = normalize_origins(&[DEFAULT_CORS_ORIGINS.to_string()]);
        }

        Ok(ServerSettings { addr, cors_origins })
    }
}

pub fn report_server_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of issue-tracker may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill issue-tracker");
        eprintln!("  2. Use a different port:        issue-tracker --addr 127.0.0.1:3001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}
