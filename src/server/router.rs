use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::state::AppState;
use super::ws;
use crate::api;

/// Build the complete axum Router: the REST surface, interactive API docs,
/// the pairing page, and the WebSocket push channel.
pub fn build(state: AppState) -> Router {
    Router::new()
        .merge(api::routes())
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api::ApiDoc::openapi()))
        .route("/wpp", get(pairing_page))
        .route("/ws", get(ws::handle_upgrade))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn pairing_page() -> Html<&'static str> {
    Html(include_str!("../../static/wpp.html"))
}
