use axum::Json;
use serde_json::Value;

/// GET / - app health.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "App health status")
    )
)]
pub async fn handler() -> Json<Value> {
    Json(serde_json::json!({
        "data": {
            "health": "true",
        }
    }))
}
