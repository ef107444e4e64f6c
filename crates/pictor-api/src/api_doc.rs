//! OpenAPI documentation for the media API, served at `/api/openapi.json`
//! and rendered by RapiDoc at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use pictor_core::models;

/// Returns the OpenAPI spec.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pictor API",
        version = "0.1.0",
        description = "Media ingestion API: multipart image upload with thumbnail derivation, object storage, and metadata CRUD. All endpoints are versioned under /api/v1/."
    ),
    paths(
        handlers::media_create::create_media,
        handlers::media_get::get_media,
        handlers::media_update::update_media_description,
        handlers::health::health_check,
    ),
    components(
        schemas(
            models::MediumResponse,
            handlers::media_update::UpdateMediaRequest,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "media", description = "Media upload, retrieval, and metadata operations"),
        (name = "health", description = "Service health checks")
    )
)]
pub struct ApiDoc;
