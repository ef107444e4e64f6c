use async_trait::async_trait;
use pictor_core::{AppError, Medium, NewMedium};
use uuid::Uuid;

/// Media metadata repository.
///
/// Absence is a normal, representable outcome: `find_by_id` and
/// `update_description` return `Ok(None)` for unknown identifiers, never an
/// error. A trait seam rather than a concrete type so the ingestion pipeline
/// can be exercised against an in-memory implementation.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Insert a new record and return the canonical stored row.
    async fn insert(&self, record: NewMedium) -> Result<Medium, AppError>;

    /// Fetch a record by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Medium>, AppError>;

    /// Update the description of an existing record, touching no other field.
    /// Returns the updated row, or `None` when no row matches `id`.
    async fn update_description(
        &self,
        id: Uuid,
        description: &str,
    ) -> Result<Option<Medium>, AppError>;
}
