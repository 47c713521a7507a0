//! Lifecycle event bus.
//!
//! The client publishes typed lifecycle events onto a broadcast channel; the
//! supervisor and every connected UI session subscribe. There is no replay:
//! a new subscriber only sees events emitted after it subscribed.

use tokio::sync::broadcast;

/// Buffered events per subscriber before the slowest one starts lagging.
const EVENT_BUFFER: usize = 64;

/// A state-change notification from the external client, relayed verbatim or
/// lightly reshaped to UI sessions.
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    /// Pairing QR challenge text.
    Qr(String),
    /// Loading progress with a human-readable stage message.
    Loading { percent: u8, message: String },
    /// Session authenticated.
    Authenticated,
    /// Client fully operational.
    Ready,
    /// Authentication failed with the given reason.
    AuthFailure(String),
    /// Client disconnected with the given reason.
    Disconnected(String),
    /// Raw inbound chat message object.
    Message(serde_json::Value),
}

/// Broadcast fan-out for [`LifecycleEvent`]s.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<LifecycleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_BUFFER);
        Self { tx }
    }

    /// Publish an event to all current subscribers. Publishing with no
    /// subscribers is not an error.
    pub fn publish(&self, event: LifecycleEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
