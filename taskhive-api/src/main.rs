//! # TaskHive API Server
//!
//! This is the main API server for TaskHive, a multi-user task tracker
//! backed entirely by in-process state.
//!
//! ## Architecture
//!
//! The API server is built with Axum and provides:
//! - Account endpoints (register, login) issuing 24h bearer tokens
//! - Per-user task CRUD, scoped to the authenticated owner
//! - A health endpoint for liveness probes
//!
//! ## Usage
//!
//! ```bash
//! JWT_SECRET=<at least 32 chars> cargo run -p taskhive-api
//! ```

use taskhive_api::{
    app::{build_router, AppState},
    config::Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskhive_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "TaskHive API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let config = Config::from_env()?;
    let addr = config.bind_address();

    // Build Axum application
    let state = AppState::new(config);
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received, exiting...");
}
