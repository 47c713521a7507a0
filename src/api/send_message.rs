use axum::extract::State;
use axum::Json;

use super::types::{Envelope, SendMessageRequest, INVALID_VALUE};
use crate::error::{Error, Result};
use crate::format::normalize_phone;
use crate::server::state::AppState;

/// POST /send-message - send a text message.
///
/// Precondition order: field validation, connection state, registration.
#[utoipa::path(
    post,
    path = "/send-message",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Send receipt"),
        (status = 422, description = "Validation, connection, or registration failure"),
        (status = 500, description = "Client rejected the send")
    )
)]
pub async fn handler(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<Envelope>> {
    let mut errors = Vec::new();
    if request.number.is_empty() {
        errors.push(("number", INVALID_VALUE));
    }
    if request.message.is_empty() {
        errors.push(("message", INVALID_VALUE));
    }
    if !errors.is_empty() {
        return Err(Error::validation(errors));
    }

    let number = normalize_phone(&request.number);

    if !state.adapter.is_connected().await {
        return Err(Error::NotConnected);
    }
    if !state.adapter.is_registered(&number).await {
        return Err(Error::NotRegistered);
    }

    let receipt = state.adapter.send_text(&number, &request.message).await?;
    Ok(Envelope::ok(receipt))
}
