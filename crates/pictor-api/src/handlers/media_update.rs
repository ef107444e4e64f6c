use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use bytes::Bytes;
use pictor_core::models::MediumResponse;
use pictor_core::AppError;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::{Principal, SCOPE_MEDIA_WRITE};
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Update payload, accepted both as a JSON body and as a urlencoded form.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMediaRequest {
    pub description: Option<String>,
}

/// Decode the update body, trying JSON first and falling back to a
/// urlencoded form when the bytes do not parse as JSON. A body in neither
/// shape decodes to an empty request, which the handler rejects for its
/// missing description.
fn decode_update_body(body: &[u8]) -> UpdateMediaRequest {
    if let Ok(request) = serde_json::from_slice::<UpdateMediaRequest>(body) {
        return request;
    }

    serde_urlencoded::from_bytes::<UpdateMediaRequest>(body).unwrap_or_default()
}

/// Replace the description of an existing media record. No other field is
/// touched and no blob I/O occurs.
#[utoipa::path(
    put,
    path = "/api/v1/media/{id}",
    tag = "media",
    params(
        ("id" = Uuid, Path, description = "Media ID")
    ),
    request_body(content = UpdateMediaRequest, description = "New description, as JSON or a urlencoded form"),
    responses(
        (status = 200, description = "Media updated", body = MediumResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Token lacks the media write scope", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 422, description = "Missing description", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, body),
    fields(media_id = %id, account_id = ?principal.account_id, operation = "update_media")
)]
pub async fn update_media_description(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MediumResponse>, HttpAppError> {
    principal.require_scope(SCOPE_MEDIA_WRITE)?;

    // Malformed ids resolve the same way as unknown ones.
    let id: Uuid = id
        .parse()
        .map_err(|_| AppError::NotFound("Not found".to_string()))?;

    let description = decode_update_body(&body)
        .description
        .ok_or_else(|| AppError::Validation("description is required".to_string()))?;

    let medium = state
        .repository
        .update_description(id, &description)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

    Ok(Json(MediumResponse::from(medium)))
}
