//! Service and collaborator initialization

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use filedrop_core::Config;
use filedrop_db::{PgMetadataStore, UserRepository};
use filedrop_storage::{create_storage, Storage};
use sqlx::PgPool;

use crate::services::notify::HttpFunctionInvoker;
use crate::state::AppState;

/// Build every external collaborator and the application state over them.
pub async fn initialize_services(config: &Config, pool: PgPool) -> Result<Arc<AppState>> {
    tracing::info!("Initializing storage backend...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;
    tracing::info!(
        backend = ?storage.backend_type(),
        "Storage backend initialized successfully"
    );

    let credentials = Arc::new(UserRepository::new(pool.clone()));
    let metadata = Arc::new(PgMetadataStore::new(pool));

    let notifier = Arc::new(
        HttpFunctionInvoker::new(
            config.notify_function_url.clone(),
            config.notify_function_name.clone(),
            Duration::from_secs(config.cloud_timeout_seconds),
        )
        .context("Failed to initialize notification invoker")?,
    );
    tracing::info!(
        function = %config.notify_function_name,
        "Notification invoker initialized"
    );

    Ok(Arc::new(AppState::new(
        config.clone(),
        credentials,
        metadata,
        storage,
        notifier,
    )))
}
