//! Application state shared across handlers.

use std::sync::Arc;

use pictor_core::Config;
use pictor_db::MediaRepository;
use pictor_processing::Thumbnailer;
use pictor_storage::Storage;

use crate::services::MediaIngestService;

/// Shared application state, passed to handlers as `State<Arc<AppState>>`.
pub struct AppState {
    pub config: Config,
    pub repository: Arc<dyn MediaRepository>,
    pub storage: Arc<dyn Storage>,
    pub ingest: MediaIngestService,
}

impl AppState {
    pub fn new(
        config: Config,
        repository: Arc<dyn MediaRepository>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        let ingest = MediaIngestService::new(
            storage.clone(),
            repository.clone(),
            Thumbnailer::default(),
        );

        AppState {
            config,
            repository,
            storage,
            ingest,
        }
    }
}
