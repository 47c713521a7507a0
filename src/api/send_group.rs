use axum::extract::State;
use axum::Json;

use super::types::{Envelope, SendGroupRequest, INVALID_VALUE};
use crate::error::{Error, Result};
use crate::server::state::AppState;

/// POST /send-group-message - send a text message to a group, addressed by
/// serialized `id` or resolved case-insensitively by display `name`.
#[utoipa::path(
    post,
    path = "/send-group-message",
    request_body = SendGroupRequest,
    responses(
        (status = 200, description = "Send receipt"),
        (status = 422, description = "Missing id/name/message or no group with the given name"),
        (status = 500, description = "Client rejected the send")
    )
)]
pub async fn handler(
    State(state): State<AppState>,
    Json(request): Json<SendGroupRequest>,
) -> Result<Json<Envelope>> {
    let id = request.id.filter(|s| !s.is_empty());
    let name = request.name.filter(|s| !s.is_empty());

    let mut errors = Vec::new();
    if id.is_none() && name.is_none() {
        errors.push(("id", "Invalid value, you can use `id` or `name`"));
    }
    if request.message.is_empty() {
        errors.push(("message", INVALID_VALUE));
    }
    if !errors.is_empty() {
        return Err(Error::validation(errors));
    }

    let chat_id = match id {
        Some(id) => id,
        None => {
            // Validation above guarantees a name when no id is present.
            let name = name.unwrap_or_default();
            state
                .adapter
                .find_group_by_name(&name)
                .await?
                .ok_or(Error::GroupNotFound(name))?
                .id
        }
    };

    let receipt = state.adapter.send_to_group(&chat_id, &request.message).await?;
    Ok(Envelope::ok(receipt))
}
