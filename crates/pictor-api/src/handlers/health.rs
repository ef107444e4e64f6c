use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. Static payload; no dependency is touched.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = serde_json::Value)
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
