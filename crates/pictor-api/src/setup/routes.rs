//! Route configuration and setup

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Json, Router,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa_rapidoc::RapiDoc;

use pictor_core::Config;

use crate::auth::{auth_middleware, AuthState};
use crate::handlers;
use crate::state::AppState;

/// Assemble the application router: public routes, scope-protected routes
/// behind the auth middleware, API docs, and the outer layers.
pub fn build_router(state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(&state.config)?;
    let auth_state = Arc::new(AuthState::new(&state.config.jwt_secret));
    let body_limit = state.config.max_file_size_bytes;

    // Server-level cap on in-flight requests
    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let app = public_routes()
        .merge(protected_routes().layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        )))
        .merge(RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Public routes (no authentication required)
fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/media/{id}", get(handlers::media_get::get_media))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
}

/// Protected routes (require a verified token)
fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/media", post(handlers::media_create::create_media))
        .route(
            "/api/v1/media/{id}",
            put(handlers::media_update::update_media_description),
        )
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
