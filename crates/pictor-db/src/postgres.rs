use async_trait::async_trait;
use pictor_core::{AppError, Medium, NewMedium};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::repository::MediaRepository;

/// Postgres-backed media repository.
#[derive(Clone)]
pub struct PgMediaRepository {
    pool: PgPool,
}

impl PgMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepository for PgMediaRepository {
    #[tracing::instrument(
        skip(self, record),
        fields(db.table = "media", db.operation = "insert", db.record_id = %record.id)
    )]
    async fn insert(&self, record: NewMedium) -> Result<Medium, AppError> {
        let (thumbnail_url, thumbnail_width, thumbnail_height) = match record.thumbnail {
            Some(ref t) => (Some(t.url.clone()), Some(t.width), Some(t.height)),
            None => (None, None, None),
        };

        let row: Option<Medium> = sqlx::query_as::<Postgres, Medium>(
            r#"
            INSERT INTO media (
                id, content_type, url, width, height,
                description, thumbnail_url, thumbnail_width, thumbnail_height
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.content_type)
        .bind(&record.url)
        .bind(record.width)
        .bind(record.height)
        .bind(&record.description)
        .bind(&thumbnail_url)
        .bind(thumbnail_width)
        .bind(thumbnail_height)
        .fetch_optional(&self.pool)
        .await?;

        // RETURNING always yields the row on success; treat an empty result
        // as a persistence fault rather than silently returning nothing.
        row.ok_or_else(|| AppError::Persistence("insert failed unexpectedly".to_string()))
    }

    #[tracing::instrument(
        skip(self),
        fields(db.table = "media", db.operation = "select", db.record_id = %id)
    )]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Medium>, AppError> {
        let row: Option<Medium> =
            sqlx::query_as::<Postgres, Medium>("SELECT * FROM media WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row)
    }

    #[tracing::instrument(
        skip(self, description),
        fields(db.table = "media", db.operation = "update", db.record_id = %id)
    )]
    async fn update_description(
        &self,
        id: Uuid,
        description: &str,
    ) -> Result<Option<Medium>, AppError> {
        let row: Option<Medium> = sqlx::query_as::<Postgres, Medium>(
            r#"
            UPDATE media
            SET description = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
