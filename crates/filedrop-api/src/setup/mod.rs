//! Application setup and initialization
//!
//! All startup logic lives here rather than in main.rs: telemetry, database,
//! storage, services, and routes.

pub mod database;
pub mod routes;
pub mod server;
pub mod services;

use std::sync::Arc;

use anyhow::{Context, Result};
use filedrop_core::Config;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry();
    tracing::info!("Configuration loaded and validated successfully");

    // Setup database (provisions the user and upload-record tables)
    let pool = database::setup_database(&config).await?;

    // Initialize storage, collaborators, and services
    let state = services::initialize_services(&config, pool).await?;

    // Setup routes
    let router = routes::build_router(state.clone());

    Ok((state, router))
}
