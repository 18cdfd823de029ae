//! # Tally Rewards API
//!
//! HTTP server for receipt processing and reward points lookup.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rewards API Server                               │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Routes ───► tally-core                   │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                            ReceiptStore                                 │
//! │                         (in-memory, process                             │
//! │                              lifetime)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use rewards_api::{router, ReceiptStore, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    info!("Starting Tally Rewards API server...");

    // Load configuration
    let config = ServiceConfig::load()?;
    let addr = config.socket_addr();
    info!(%addr, "Configuration loaded");

    // Create shared state: the process-lifetime receipt store
    let store = ReceiptStore::new();

    // Build routes and start server
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
