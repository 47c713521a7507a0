pub mod clear_message;
pub mod health;
pub mod send_group;
pub mod send_media;
pub mod send_message;
pub mod state;
pub mod types;

use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

use crate::server::state::AppState;

/// OpenAPI description of the REST surface, served by Swagger UI at
/// `/api-docs`.
#[derive(OpenApi)]
#[openapi(
    info(title = "wpp-gateway", description = "WhatsApp Web REST gateway"),
    paths(
        health::handler,
        state::handler,
        send_message::handler,
        send_media::handler,
        send_group::handler,
        clear_message::handler,
    ),
    components(schemas(
        types::SendMessageRequest,
        types::SendMediaRequest,
        types::SendGroupRequest,
        types::ClearMessageRequest,
    ))
)]
pub struct ApiDoc;

/// Build the REST routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::handler))
        .route("/state", get(state::handler))
        .route("/send-message", post(send_message::handler))
        .route("/send-media", post(send_media::handler))
        .route("/send-group-message", post(send_group::handler))
        .route("/clear-message", post(clear_message::handler))
}
