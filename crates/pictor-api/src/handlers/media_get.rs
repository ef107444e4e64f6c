use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use pictor_core::models::MediumResponse;
use pictor_core::AppError;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Fetch media metadata by id. Public; no token required.
#[utoipa::path(
    get,
    path = "/api/v1/media/{id}",
    tag = "media",
    params(
        ("id" = Uuid, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media found", body = MediumResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(media_id = %id, operation = "get_media"))]
pub async fn get_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MediumResponse>, HttpAppError> {
    // Malformed ids resolve the same way as unknown ones.
    let id: Uuid = id
        .parse()
        .map_err(|_| AppError::NotFound("Not found".to_string()))?;

    let medium = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

    Ok(Json(MediumResponse::from(medium)))
}
