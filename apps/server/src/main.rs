//! # Kedai Kita API Server
//!
//! Process entry point: wires configuration, the document store and the
//! HTTP router together, then serves until shutdown.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tracing init → config load → store connect (+ migrations)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  axum::serve on 0.0.0.0:<PORT> (default 8000)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SIGINT/SIGTERM → graceful shutdown → store pool closed                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kedai_server::{routes, AppState, ServerConfig};
use kedai_store::{DocumentStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Kedai Kita API server...");

    // Load configuration
    let config = ServerConfig::load()?;
    info!(
        port = config.port,
        store_url = %config.database_url,
        store_name = %config.database_name,
        "Configuration loaded"
    );

    // Connect to the document store (runs migrations)
    let store = DocumentStore::connect(StoreConfig::new(&config.database_url)).await?;
    info!("Connected to document store");

    // Create shared state - constructed once, injected into every handler
    let state = Arc::new(AppState::new(store.clone(), config.clone()));
    let app = routes::router(state);

    // Build server address
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Starting HTTP server");

    // Serve until a shutdown signal arrives
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Close the store at process shutdown
    store.close().await;
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
