//! # Sitepulse
//!
//! A lightweight web-analytics ingestion server.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - The in-memory stats store
//! - HTTP server

use anyhow::Result;
use tracing::info;

use sitepulse::config::Settings;
use sitepulse::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    sitepulse::telemetry::init_tracing();

    info!("Starting Sitepulse...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
