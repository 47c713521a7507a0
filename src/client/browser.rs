// Browser-automation client bridge.
//
// The gateway delegates the actual chat-network protocol to an external
// browser-automation backed client. This module is the attachment point for
// that bridge: it owns the launch configuration (executable path and flags)
// and the event bus the bridge publishes lifecycle events on. Until the
// bridge is linked in, every operation reports a distinguished unavailable
// error; the HTTP surface then answers with its not-connected gating, so the
// server stays fully serviceable for pairing-UI and health traffic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::{Chat, ConnectionState, EventBus, MediaPayload, MessagingClient, SendReceipt};
use crate::config::Config;
use crate::error::{Error, Result};

pub struct BrowserClient {
    config: Arc<Config>,
    /// Publishing seam for the bridge's lifecycle callbacks.
    #[allow(dead_code)]
    events: EventBus,
}

impl BrowserClient {
    pub fn new(config: Arc<Config>, events: EventBus) -> Self {
        Self { config, events }
    }

    fn unavailable() -> Error {
        Error::ClientUnavailable(
            "browser-automation bridge is not linked into this build".to_string(),
        )
    }
}

#[async_trait]
impl MessagingClient for BrowserClient {
    async fn initialize(&self) -> Result<()> {
        tracing::info!(
            browser_path = ?self.config.browser_path,
            args = self.config.browser_args.len(),
            "Launching browser-automation client (stub)"
        );
        Err(Self::unavailable())
    }

    async fn destroy(&self) -> Result<()> {
        Ok(())
    }

    async fn state(&self) -> Result<ConnectionState> {
        Err(Self::unavailable())
    }

    async fn is_registered(&self, _id: &str) -> Result<bool> {
        Err(Self::unavailable())
    }

    async fn chats(&self) -> Result<Vec<Chat>> {
        Err(Self::unavailable())
    }

    async fn send_text(&self, _id: &str, _body: &str) -> Result<SendReceipt> {
        Err(Self::unavailable())
    }

    async fn send_media(&self, _id: &str, _media: MediaPayload) -> Result<SendReceipt> {
        Err(Self::unavailable())
    }

    async fn clear_messages(&self, _id: &str) -> Result<()> {
        Err(Self::unavailable())
    }
}
