use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use pictor_core::models::MediumResponse;

use crate::auth::{Principal, SCOPE_MEDIA_WRITE};
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_upload;

/// Upload media handler
///
/// Accepts a multipart form with a required `file` part and an optional
/// `description` part, then delegates to the ingestion pipeline.
#[utoipa::path(
    post,
    path = "/api/v1/media",
    tag = "media",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Media ingested", body = MediumResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Token lacks the media write scope", body = ErrorResponse),
        (status = 422, description = "Missing file or undecodable image", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(account_id = ?principal.account_id, operation = "create_media")
)]
pub async fn create_media(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MediumResponse>), HttpAppError> {
    principal.require_scope(SCOPE_MEDIA_WRITE)?;
    principal.require_account()?;

    let payload = extract_upload(&mut multipart).await?;

    let medium = state
        .ingest
        .ingest(payload.data, &payload.content_type, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(MediumResponse::from(medium))))
}
