use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::server::state::AppState;

/// GET /state - connection state. 200 iff the client reports connected; any
/// other state (including a failed query, downgraded by the adapter) is 503.
#[utoipa::path(
    get,
    path = "/state",
    responses(
        (status = 200, description = "Client is connected"),
        (status = 503, description = "NotConnected")
    )
)]
pub async fn handler(State(state): State<AppState>) -> Response {
    if state.adapter.is_connected().await {
        Json(serde_json::json!({ "connected": true })).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "state": "NotConnected" })),
        )
            .into_response()
    }
}
