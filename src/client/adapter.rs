//! Gateway-side wrapper around the external client.
//!
//! Gating queries (connection state, registration) never propagate client
//! failures: they are logged and downgraded to a safe default so a flaky
//! client reads as not-connected / not-registered. Send-family operations
//! pass errors straight through; retry policy, if any, belongs to the
//! client itself.

use std::sync::Arc;

use crate::client::{Chat, ConnectionState, EventBus, MediaPayload, MessagingClient, SendReceipt};
use crate::error::Result;

pub struct ClientAdapter {
    client: Arc<dyn MessagingClient>,
    events: EventBus,
}

impl ClientAdapter {
    pub fn new(client: Arc<dyn MessagingClient>, events: EventBus) -> Self {
        Self { client, events }
    }

    /// The lifecycle event bus shared with the client.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub async fn initialize(&self) -> Result<()> {
        self.client.initialize().await
    }

    pub async fn destroy(&self) -> Result<()> {
        self.client.destroy().await
    }

    /// Query the connection state, downgrading a client failure to
    /// [`ConnectionState::Disconnected`].
    pub async fn connection_state(&self) -> ConnectionState {
        match self.client.state().await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "Connection state query failed");
                ConnectionState::Disconnected
            }
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.connection_state().await.is_connected()
    }

    /// Registration check, failing closed on a client error.
    pub async fn is_registered(&self, id: &str) -> bool {
        match self.client.is_registered(id).await {
            Ok(registered) => registered,
            Err(e) => {
                tracing::error!(id, error = %e, "Registration check failed");
                false
            }
        }
    }

    /// Case-insensitive exact match against group chat names; first match in
    /// the client's listing order wins. An empty result is not an error.
    pub async fn find_group_by_name(&self, name: &str) -> Result<Option<Chat>> {
        let target = name.to_lowercase();
        let chats = self.client.chats().await?;
        Ok(chats
            .into_iter()
            .find(|chat| chat.is_group && chat.name.to_lowercase() == target))
    }

    pub async fn send_text(&self, id: &str, body: &str) -> Result<SendReceipt> {
        self.client.send_text(id, body).await
    }

    pub async fn send_media(&self, id: &str, media: MediaPayload) -> Result<SendReceipt> {
        self.client.send_media(id, media).await
    }

    pub async fn send_to_group(&self, group_id: &str, body: &str) -> Result<SendReceipt> {
        self.client.send_text(group_id, body).await
    }

    pub async fn clear_messages(&self, id: &str) -> Result<()> {
        self.client.clear_messages(id).await
    }
}
