//! The external messaging client seam.
//!
//! Everything the gateway needs from the browser-automation backed client is
//! captured by the [`MessagingClient`] trait; the rest of the crate works
//! against `Arc<dyn MessagingClient>` so the real bridge and the test mock
//! are interchangeable.

pub mod adapter;
pub mod browser;
pub mod event;
pub mod supervisor;

pub use adapter::ClientAdapter;
pub use browser::BrowserClient;
pub use event::{EventBus, LifecycleEvent};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Connection state reported by the client. Read fresh per request, never
/// cached by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Connected,
    Opening,
    Pairing,
    Unpaired,
    Disconnected,
    Unknown,
}

impl ConnectionState {
    pub fn is_connected(self) -> bool {
        self == ConnectionState::Connected
    }
}

/// One entry of the client's chat list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    /// Serialized chat identifier in wire form.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether this chat is a group.
    pub is_group: bool,
}

/// Acknowledgement returned by the client for a dispatched message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReceipt {
    pub id: String,
    pub recipient: String,
    pub timestamp: i64,
}

/// A media message ready for dispatch. Bytes and MIME type are both required
/// by construction.
#[derive(Debug, Clone)]
pub struct MediaPayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub caption: Option<String>,
}

/// Narrow contract over the external chat client.
///
/// `initialize` is not idempotent: it is invoked once at startup and again by
/// the lifecycle supervisor after a disconnect; re-invoking while running is
/// a caller error. Send-family operations assume the caller has already
/// confirmed the connection state; failures surface as errors and are never
/// retried here.
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Start the underlying client.
    async fn initialize(&self) -> Result<()>;

    /// Tear the underlying client down.
    async fn destroy(&self) -> Result<()>;

    /// Current connection state.
    async fn state(&self) -> Result<ConnectionState>;

    /// Whether a normalized identifier is a registered account.
    async fn is_registered(&self, id: &str) -> Result<bool>;

    /// Full chat list, in the client's listing order.
    async fn chats(&self) -> Result<Vec<Chat>>;

    /// Send a text message to a normalized identifier (individual or group).
    async fn send_text(&self, id: &str, body: &str) -> Result<SendReceipt>;

    /// Send a media message to a normalized identifier.
    async fn send_media(&self, id: &str, media: MediaPayload) -> Result<SendReceipt>;

    /// Clear all messages in the chat with a normalized identifier.
    async fn clear_messages(&self, id: &str) -> Result<()>;
}
