use axum::Json;
use serde_json::json;
use serde_json::Value;

/// `GET /health` — liveness probe for deployment checks.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
