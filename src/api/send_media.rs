use axum::extract::State;
use axum::Json;
use reqwest::header::CONTENT_TYPE;

use super::types::{Envelope, SendMediaRequest, INVALID_VALUE};
use crate::client::MediaPayload;
use crate::error::{Error, Result};
use crate::format::normalize_phone;
use crate::server::state::AppState;

/// POST /send-media - send a media message.
///
/// The media bytes are fetched server-side from the caller-supplied `file`
/// URL and the MIME type captured from that response. Validation and gating
/// are symmetric with /send-message.
#[utoipa::path(
    post,
    path = "/send-media",
    request_body = SendMediaRequest,
    responses(
        (status = 200, description = "Send receipt"),
        (status = 422, description = "Validation, connection, or registration failure"),
        (status = 500, description = "Media fetch failed or client rejected the send")
    )
)]
pub async fn handler(
    State(state): State<AppState>,
    Json(request): Json<SendMediaRequest>,
) -> Result<Json<Envelope>> {
    let mut errors = Vec::new();
    if request.number.is_empty() {
        errors.push(("number", INVALID_VALUE));
    }
    if request.file.is_empty() {
        errors.push(("file", INVALID_VALUE));
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

    let response = state
        .http
        .get(&request.file)
        .send()
        .await?
        .error_for_status()?;
    let mime_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = response.bytes().await?.to_vec();

    let media = MediaPayload {
        bytes,
        mime_type,
        caption: request.caption,
    };

    let receipt = state.adapter.send_media(&number, media).await?;
    Ok(Envelope::ok(receipt))
}
