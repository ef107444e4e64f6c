//! Media ingestion pipeline.
//!
//! Orchestrates a single upload end to end: assign an identifier, probe the
//! image, store the original, derive and store a thumbnail, then insert the
//! metadata row. The I/O order is fixed: every blob a row references is
//! durably written before the row exists, so a reader can never follow a
//! stored URL to a missing blob. The converse does not hold; blobs written
//! before a later step fails stay behind and are reconciled out-of-band.

use std::sync::Arc;

use bytes::Bytes;
use pictor_core::{new_media_id, AppError, Medium, NewMedium, ThumbnailInfo};
use pictor_db::MediaRepository;
use pictor_processing::{probe_dimensions, ProcessingError, Thumbnailer, THUMBNAIL_CONTENT_TYPE};
use pictor_storage::{original_key, thumbnail_key, Storage};

/// Ingestion orchestrator. Holds shared handles only; cloning is cheap.
#[derive(Clone)]
pub struct MediaIngestService {
    storage: Arc<dyn Storage>,
    repository: Arc<dyn MediaRepository>,
    thumbnailer: Thumbnailer,
}

impl MediaIngestService {
    pub fn new(
        storage: Arc<dyn Storage>,
        repository: Arc<dyn MediaRepository>,
        thumbnailer: Thumbnailer,
    ) -> Self {
        MediaIngestService {
            storage,
            repository,
            thumbnailer,
        }
    }

    /// Run the full ingestion sequence for one upload.
    ///
    /// The caller has already authenticated the uploader; this method only
    /// validates the payload itself. Decode work runs on the blocking pool.
    #[tracing::instrument(
        skip(self, data),
        fields(content_type = %content_type, size_bytes = data.len())
    )]
    pub async fn ingest(
        &self,
        data: Bytes,
        content_type: &str,
        description: Option<String>,
    ) -> Result<Medium, AppError> {
        if data.is_empty() {
            return Err(AppError::Validation("file is required".to_string()));
        }

        let id = new_media_id();

        let probe_data = data.clone();
        let (width, height) = tokio::task::spawn_blocking(move || probe_dimensions(&probe_data))
            .await
            .map_err(|e| AppError::Internal(format!("Probe task failed: {}", e)))?
            .map_err(processing_error)?;

        let url = self
            .storage
            .put(&original_key(id), data.clone(), content_type)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let thumbnailer = self.thumbnailer;
        let thumbnail_data = data.clone();
        let derived = tokio::task::spawn_blocking(move || thumbnailer.derive(&thumbnail_data))
            .await
            .map_err(|e| AppError::Internal(format!("Thumbnail task failed: {}", e)))?
            .map_err(processing_error)?;

        let thumbnail = match derived {
            Some(thumb) => {
                let thumb_url = self
                    .storage
                    .put(&thumbnail_key(id), thumb.bytes, THUMBNAIL_CONTENT_TYPE)
                    .await
                    .map_err(|e| AppError::Storage(e.to_string()))?;

                Some(ThumbnailInfo {
                    url: thumb_url,
                    width: thumb.width as i32,
                    height: thumb.height as i32,
                })
            }
            None => None,
        };

        let record = NewMedium {
            id,
            content_type: content_type.to_string(),
            url,
            width: width as i32,
            height: height as i32,
            description,
            thumbnail,
        };

        let medium = self.repository.insert(record).await?;

        tracing::info!(
            media_id = %medium.id,
            width = medium.width,
            height = medium.height,
            has_thumbnail = medium.has_thumbnail(),
            "Media ingested"
        );

        Ok(medium)
    }
}

fn processing_error(err: ProcessingError) -> AppError {
    match err {
        ProcessingError::UnsupportedFormat(msg) => AppError::UnsupportedFormat(msg),
        ProcessingError::Encode(msg) => AppError::Internal(msg),
    }
}
