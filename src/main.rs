//! Sample Records API - Main Application Entry Point
//!
//! Starts one of the two read-only services, picked by the `SERVICE`
//! environment variable.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Initialize logging
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use anyhow::Context;
use sample_records_api::{app, config::Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first: DEBUG decides the default log level
    let config = Config::from_env().context("invalid configuration")?;

    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .init();
    tracing::info!(service = %config.service, debug = config.debug, "Configuration loaded");

    let kind = config.service;
    let app = app::router(&config);

    // Bind to network address and start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Starting {} on {}", kind, addr);
    tracing::info!(
        "Endpoints: GET {} (optional ?{}={}), GET /api/health, GET /",
        kind.listing_path(),
        kind.filter_param(),
        kind.filter_values().join("|"),
    );

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
