use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Message shown for an empty or missing field, matching the validator the
/// REST surface was specified against.
pub const INVALID_VALUE: &str = "Invalid value";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    /// Recipient phone number, normalized server-side.
    #[serde(default)]
    #[schema(example = "5511912345678")]
    pub number: String,
    #[serde(default)]
    #[schema(example = "This is a test message.")]
    pub message: String,
}

/// Media is sourced from a caller-supplied remote URL; the MIME type is
/// captured from the fetch response.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendMediaRequest {
    #[serde(default)]
    #[schema(example = "5511912345678")]
    pub number: String,
    /// Remote URL the media bytes are fetched from.
    #[serde(default)]
    #[schema(example = "https://example.com/cat.png")]
    pub file: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendGroupRequest {
    /// Serialized group chat id; either this or `name` is required.
    #[serde(default)]
    pub id: Option<String>,
    /// Group display name, resolved case-insensitively.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClearMessageRequest {
    #[serde(default)]
    #[schema(example = "5511912345678")]
    pub number: String,
}

/// Success envelope: `{"status": true, "response": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub status: bool,
    pub response: Value,
}

impl Envelope {
    pub fn ok<T: Serialize>(response: T) -> axum::Json<Self> {
        axum::Json(Self {
            status: true,
            response: serde_json::to_value(response).unwrap_or(Value::Null),
        })
    }
}
