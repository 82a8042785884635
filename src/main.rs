//! # Distribution Budget Server
//!
//! Catalog and quotation backend for electrical distribution networks.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Storage backend (PostgreSQL or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use distribution_budget::config::Settings;
use distribution_budget::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    distribution_budget::telemetry::init_tracing();

    info!("Starting Distribution Budget Server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = %settings.storage.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
