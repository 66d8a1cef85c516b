use axum::Json;
use serde_json::{Value, json};

/// Liveness probe; answers in the same envelope as the rest of the API
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = Value)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
