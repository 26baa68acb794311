//! TTL Cache - An embeddable in-memory key-value cache
//!
//! Runs the cache with its HTTP front end until SIGINT/SIGTERM.

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_cache::{Config, Server};

/// Main entry point for the cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache engine (starts the TTL sweeper)
/// 4. Serve HTTP on the configured port, if enabled
/// 5. On SIGINT/SIGTERM, drain connections and stop the sweeper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TTL cache");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cleanup_interval={:?}, max_size={}, http_enabled={}, port={}",
        config.cache.effective_cleanup_interval(),
        config.cache.max_size,
        config.http.enabled,
        config.http.port
    );
    if config.cache.max_size > 0 {
        warn!("max_size is advisory only, no eviction is performed");
    }

    let server = Server::new(config);
    let addr = server.addr();

    server
        .run(shutdown_signal())
        .await
        .with_context(|| format!("server on {addr} failed"))?;

    info!("Shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
