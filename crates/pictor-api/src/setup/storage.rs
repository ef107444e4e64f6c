//! Storage backend setup

use std::sync::Arc;

use anyhow::{Context, Result};
use pictor_core::Config;
use pictor_storage::{create_storage, Storage};

/// Build the configured storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(backend = %storage.backend_type(), "Storage backend ready");

    Ok(storage)
}
