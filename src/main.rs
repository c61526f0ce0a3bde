use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use issue_tracker::app::{report_server_error, Args};
use issue_tracker::cors::build_cors_layer;
use issue_tracker::http_logging::HttpLoggingLayer;
use issue_tracker::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use issue_tracker::server::{router, ShutdownSignal};
use issue_tracker::user_config::{self, UserConfig};
use issue_tracker::IssueStore;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir();
    let log_file = log_dir.join(LOG_FILENAME);

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Load user-level config; the file is optional.
    let user_cfg = user_config::load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let settings = args.server_settings(&user_cfg)?;
    info!("CORS origins: {}", settings.cors_origins.join(", "));
    let cors = build_cors_layer(settings.cors_origins);

    // Create shutdown signal channel; the sender lives as long as main
    let (shutdown_tx, mut shutdown_rx) = watch::channel(ShutdownSignal::None);
    let shutdown_tx = Arc::new(shutdown_tx);
    let signal_tx = Arc::clone(&shutdown_tx);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                signal_tx.send_replace(ShutdownSignal::Shutdown);
            }
            Err(e) => warn!("Failed to listen for Ctrl-C: {e}"),
        }
    });

    let store = Arc::new(IssueStore::new());
    let app = router(store).layer(cors).layer(HttpLoggingLayer);

    let addr = settings.addr;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting issue tracker on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while shutdown_rx.changed().await.is_ok() {
                if *shutdown_rx.borrow() == ShutdownSignal::Shutdown {
                    info!("Received shutdown signal, stopping server...");
                    break;
                }
            }
        })
        .await?;

    info!("Issue tracker stopped");
    Ok(())
}
