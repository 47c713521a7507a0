//! WebSocket push channel for UI sessions.
//!
//! Each connected pairing-UI session gets a greeting frame, then a live
//! relay of client lifecycle events. There is no replay: a session only
//! sees events emitted after it connected, and a lagged session drops the
//! missed events and continues.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;

use super::state::AppState;
use crate::client::LifecycleEvent;
use crate::qr;

/// Named frames on the push channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum WsFrame {
    /// Human-readable status line.
    Message(String),
    /// Pairing challenge as an image data URL.
    Qr(String),
    Authenticated(String),
    Ready(String),
}

/// Handle WebSocket upgrade for `GET /ws`.
pub async fn handle_upgrade(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let session_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(session = %session_id, "UI session connected");

    let (mut sender, mut receiver) = socket.split();
    let mut events = state.adapter.events().subscribe();

    // Greeting; past events are never replayed.
    if send_frame(&mut sender, &WsFrame::Message("Connecting...".to_string()))
        .await
        .is_err()
    {
        return;
    }

    let relay = async {
        loop {
            match events.recv().await {
                Ok(event) => {
                    for frame in frames_for(&event) {
                        if send_frame(&mut sender, &frame).await.is_err() {
                            return;
                        }
                    }
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(session = %session_id, missed, "UI session lagged, events dropped");
                }
                Err(RecvError::Closed) => return,
            }
        }
    };

    let drain = async {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    };

    tokio::select! {
        _ = relay => {}
        _ = drain => {}
    }

    tracing::info!(session = %session_id, "UI session disconnected");
}

async fn send_frame(
    sender: &mut SplitSink<WebSocket, Message>,
    frame: &WsFrame,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(frame).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}

/// Map a lifecycle event to the frames pushed to a UI session.
fn frames_for(event: &LifecycleEvent) -> Vec<WsFrame> {
    match event {
        LifecycleEvent::Qr(challenge) => match qr::challenge_to_data_url(challenge) {
            Ok(url) => vec![
                WsFrame::Qr(url),
                WsFrame::Message("QR Code received, scan!".to_string()),
            ],
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode QR challenge");
                vec![]
            }
        },
        LifecycleEvent::Loading { percent, message } => vec![WsFrame::Message(format!(
            "LOADING SCREEN, {percent}% - {message}"
        ))],
        LifecycleEvent::Authenticated => vec![
            WsFrame::Authenticated("Whatsapp is authenticated!".to_string()),
            WsFrame::Message("Whatsapp is authenticated!".to_string()),
        ],
        LifecycleEvent::Ready => vec![
            WsFrame::Ready("Whatsapp is ready!".to_string()),
            WsFrame::Message("Whatsapp is ready!".to_string()),
        ],
        LifecycleEvent::AuthFailure(_) => {
            vec![WsFrame::Message("Auth failure, restarting...".to_string())]
        }
        LifecycleEvent::Disconnected(_) => {
            vec![WsFrame::Message("Whatsapp is disconnected!".to_string())]
        }
        // Inbound chat messages go to the webhook, not the UI.
        LifecycleEvent::Message(_) => vec![],
    }
}
