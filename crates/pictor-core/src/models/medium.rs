use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Persisted media record.
///
/// `id`, `content_type`, `url`, `width`, and `height` are immutable after
/// insert; `description` is the only mutable field. The thumbnail columns are
/// jointly present or jointly absent, enforced by a table CHECK constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Medium {
    pub id: Uuid,
    pub content_type: String,
    pub url: String,
    pub width: i32,
    pub height: i32,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: Option<i32>,
    pub thumbnail_height: Option<i32>,
}

/// Insert payload assembled by the ingestion pipeline.
#[derive(Debug, Clone)]
pub struct NewMedium {
    pub id: Uuid,
    pub content_type: String,
    pub url: String,
    pub width: i32,
    pub height: i32,
    pub description: Option<String>,
    pub thumbnail: Option<ThumbnailInfo>,
}

/// Stored thumbnail variant: public URL plus pixel dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailInfo {
    pub url: String,
    pub width: i32,
    pub height: i32,
}

/// Wire representation of a media record.
///
/// `description` is always serialized (null when unset); the thumbnail fields
/// are omitted entirely when no thumbnail exists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediumResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub content_type: String,
    pub url: String,
    pub width: i32,
    pub height: i32,
    pub description: Option<String>,
    #[serde(
        rename = "thumbnailUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_url: Option<String>,
    #[serde(
        rename = "thumbnailWidth",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_width: Option<i32>,
    #[serde(
        rename = "thumbnailHeight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_height: Option<i32>,
}

impl From<Medium> for MediumResponse {
    fn from(medium: Medium) -> Self {
        MediumResponse {
            id: medium.id,
            content_type: medium.content_type,
            url: medium.url,
            width: medium.width,
            height: medium.height,
            description: medium.description,
            thumbnail_url: medium.thumbnail_url,
            thumbnail_width: medium.thumbnail_width,
            thumbnail_height: medium.thumbnail_height,
        }
    }
}

impl Medium {
    /// True when all three thumbnail fields are set, false when none are.
    /// Partial state is invalid and rejected by the database.
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail_url.is_some()
            && self.thumbnail_width.is_some()
            && self.thumbnail_height.is_some()
    }
}
