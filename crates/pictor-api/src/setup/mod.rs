//! Application setup and initialization.

mod database;
mod routes;
mod server;
mod storage;

pub use routes::build_router;
pub use server::start_server;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use pictor_core::Config;
use pictor_db::PgMediaRepository;

use crate::state::AppState;

/// Wire configuration into a ready-to-serve application: database pool plus
/// migrations, storage backend, ingestion service, and router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let pool = database::setup_database(&config).await?;
    let repository = Arc::new(PgMediaRepository::new(pool));
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config, repository, storage));
    let app = build_router(state.clone())?;

    Ok((state, app))
}
