use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("Client is not connected")]
    NotConnected,

    #[error("The number is not registered")]
    NotRegistered,

    #[error("No group found with name: {0}")]
    GroupNotFound(String),

    #[error("Client unavailable: {0}")]
    ClientUnavailable(String),

    #[error("Send failed: {0}")]
    Send(String),

    #[error("QR encoding error: {0}")]
    Qr(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a validation error from `(field, message)` pairs.
    pub fn validation<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Error::Validation(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Map errors to the uniform `{status: false, ...}` envelope.
///
/// Validation and precondition failures are 422 with `message` (field map or
/// human-readable reason); everything else is a 500 with the raw error detail
/// under `response`, matching the success-path key.
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            Error::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "status": false, "message": fields }),
            ),
            Error::NotConnected | Error::NotRegistered | Error::GroupNotFound(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "status": false, "message": self.to_string() }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "status": false, "response": self.to_string() }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
