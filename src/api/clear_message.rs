use axum::extract::State;
use axum::Json;

use super::types::{ClearMessageRequest, Envelope, INVALID_VALUE};
use crate::error::{Error, Result};
use crate::format::normalize_phone;
use crate::server::state::AppState;

/// POST /clear-message - clear all messages in a chat.
#[utoipa::path(
    post,
    path = "/clear-message",
    request_body = ClearMessageRequest,
    responses(
        (status = 200, description = "Cleared"),
        (status = 422, description = "Validation or registration failure"),
        (status = 500, description = "Client failed to clear the chat")
    )
)]
pub async fn handler(
    State(state): State<AppState>,
    Json(request): Json<ClearMessageRequest>,
) -> Result<Json<Envelope>> {
    if request.number.is_empty() {
        return Err(Error::validation([("number", INVALID_VALUE)]));
    }

    let number = normalize_phone(&request.number);

    if !state.adapter.is_registered(&number).await {
        return Err(Error::NotRegistered);
    }

    state.adapter.clear_messages(&number).await?;
    Ok(Envelope::ok(true))
}
