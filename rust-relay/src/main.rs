//! HookRelay server - conditional GitHub webhook relay.
//!
//! This binary:
//! - Receives GitHub webhook deliveries on any path
//! - Drops `push` and `create` events sent by bot accounts
//! - Forwards everything else to `TARGET`

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hookrelay::web::is_signature_verification_enabled;
use hookrelay::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("relay_starting");

    // Load configuration
    let config = Config::from_env();
    let signature_verification = is_signature_verification_enabled(&config.webhook_secret);
    info!(
        port = config.port,
        upstream = %config.target,
        request_timeout_ms = config.request_timeout_ms,
        signature_verification,
        "config_loaded"
    );

    if !signature_verification {
        warn!("webhook_secret_not_configured");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = AppState::new(config).context("Failed to create HTTP client")?;
    let app = router(state);

    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "relay_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("relay_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
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
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("relay_shutting_down");
}
