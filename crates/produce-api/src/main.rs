//! Produce inventory server binary.
//!
//! # Usage
//!
//! ```bash
//! # With config file
//! produce-server --config config.yaml
//!
//! # With environment variables only
//! PRODUCE_SERVER__PORT=9090 produce-server
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use produce_api::http::{create_router_with_body_limit, AppState};
use produce_api::observability::{init_logging, parse_log_level, LoggingConfig};
use produce_server::ServerConfig;
use produce_storage::{MemoryProduceStore, ProduceStore};

/// Produce inventory HTTP server
#[derive(Parser, Debug)]
#[command(name = "produce-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = if let Some(config_path) = args.config {
        ServerConfig::load(&config_path)?
    } else {
        ServerConfig::from_env()?
    };

    init_logging(logging_config(&config));

    info!(version = env!("CARGO_PKG_VERSION"), "Starting produce server");

    let storage = if config.storage.seed_inventory {
        Arc::new(MemoryProduceStore::seeded())
    } else {
        Arc::new(MemoryProduceStore::new())
    };
    info!(records = storage.len().await, "In-memory store ready");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let router = create_router_with_body_limit(
        AppState::new(storage),
        config.server.body_limit_bytes,
    );

    info!(%addr, "HTTP server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server shutdown complete");
    Ok(())
}

fn logging_config(config: &ServerConfig) -> LoggingConfig {
    let logging = if config.logging.json {
        LoggingConfig::json()
    } else {
        LoggingConfig::text()
    };
    logging.with_level(parse_log_level(&config.logging.level))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
///
/// If a handler cannot be installed that branch never completes, leaving
/// the other one in charge.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
