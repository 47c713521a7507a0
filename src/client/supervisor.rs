//! Lifecycle relay task.
//!
//! One background task per process subscribes to the event bus and performs
//! the gateway-side reactions to client lifecycle events:
//!
//! - every event is logged with its detail;
//! - inbound messages are forwarded to the configured webhook URL as a
//!   fire-and-forget POST — delivery failure is logged and swallowed, never
//!   blocking the receive path;
//! - a disconnect tears the client down and re-initializes it exactly once
//!   per event. A synchronous reinit failure is only logged; it is not
//!   retried and surfaces through later lifecycle events.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::client::{ClientAdapter, LifecycleEvent};
use crate::config::Config;

pub fn spawn(adapter: Arc<ClientAdapter>, config: Arc<Config>) -> JoinHandle<()> {
    let mut rx = adapter.events().subscribe();
    let http = reqwest::Client::new();

    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => handle_event(&adapter, &config, &http, event).await,
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Lifecycle relay lagged behind the event bus");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

async fn handle_event(
    adapter: &ClientAdapter,
    config: &Config,
    http: &reqwest::Client,
    event: LifecycleEvent,
) {
    match event {
        LifecycleEvent::Qr(_) => {
            tracing::info!("QR challenge received");
        }
        LifecycleEvent::Loading { percent, message } => {
            tracing::info!(percent, message = %message, "Loading screen");
        }
        LifecycleEvent::Authenticated => {
            tracing::info!("Authenticated");
        }
        LifecycleEvent::Ready => {
            tracing::info!("Ready");
        }
        LifecycleEvent::AuthFailure(reason) => {
            tracing::error!(reason = %reason, "Authentication failure");
        }
        LifecycleEvent::Disconnected(reason) => {
            tracing::warn!(reason = %reason, "Client disconnected, reinitializing");
            if let Err(e) = adapter.destroy().await {
                tracing::error!(error = %e, "Client teardown failed");
            }
            if let Err(e) = adapter.initialize().await {
                tracing::error!(error = %e, "Client reinitialization failed");
            }
        }
        LifecycleEvent::Message(raw) => {
            tracing::info!("Inbound message received");
            if let Some(url) = config.webhook_url.clone() {
                let http = http.clone();
                tokio::spawn(async move {
                    if let Err(e) = http.post(&url).json(&raw).send().await {
                        tracing::error!(error = %e, "Webhook delivery failed");
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{
        Chat, ConnectionState, EventBus, MediaPayload, MessagingClient, SendReceipt,
    };
    use crate::error::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct CountingClient {
        destroys: AtomicUsize,
        initializes: AtomicUsize,
    }

    #[async_trait]
    impl MessagingClient for CountingClient {
        async fn initialize(&self) -> Result<()> {
            self.initializes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        async fn destroy(&self) -> Result<()> {
            self.destroys.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        async fn state(&self) -> Result<ConnectionState> {
            Ok(ConnectionState::Connected)
        }
        async fn is_registered(&self, _id: &str) -> Result<bool> {
            Ok(true)
        }
        async fn chats(&self) -> Result<Vec<Chat>> {
            Ok(vec![])
        }
        async fn send_text(&self, id: &str, _body: &str) -> Result<SendReceipt> {
            Ok(SendReceipt {
                id: "msg".to_string(),
                recipient: id.to_string(),
                timestamp: 0,
            })
        }
        async fn send_media(&self, id: &str, _media: MediaPayload) -> Result<SendReceipt> {
            Ok(SendReceipt {
                id: "msg".to_string(),
                recipient: id.to_string(),
                timestamp: 0,
            })
        }
        async fn clear_messages(&self, _id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_disconnect_triggers_exactly_one_reinit() {
        let client = Arc::new(CountingClient::default());
        let bus = EventBus::new();
        let adapter = Arc::new(ClientAdapter::new(client.clone(), bus.clone()));

        let handle = spawn(adapter, Arc::new(Config::default()));

        bus.publish(LifecycleEvent::Disconnected("NAVIGATION".to_string()));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(client.destroys.load(Ordering::SeqCst), 1);
        assert_eq!(client.initializes.load(Ordering::SeqCst), 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_non_disconnect_events_do_not_reinit() {
        let client = Arc::new(CountingClient::default());
        let bus = EventBus::new();
        let adapter = Arc::new(ClientAdapter::new(client.clone(), bus.clone()));

        let handle = spawn(adapter, Arc::new(Config::default()));

        bus.publish(LifecycleEvent::Authenticated);
        bus.publish(LifecycleEvent::Ready);
        bus.publish(LifecycleEvent::AuthFailure("bad session".to_string()));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(client.destroys.load(Ordering::SeqCst), 0);
        assert_eq!(client.initializes.load(Ordering::SeqCst), 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_message_without_webhook_is_dropped() {
        let client = Arc::new(CountingClient::default());
        let bus = EventBus::new();
        let adapter = Arc::new(ClientAdapter::new(client.clone(), bus.clone()));

        // No webhook_url configured; the event must be consumed without panic.
        let handle = spawn(adapter, Arc::new(Config::default()));

        bus.publish(LifecycleEvent::Message(serde_json::json!({"body": "hi"})));
        tokio::time::sleep(Duration::from_millis(50)).await;

        handle.abort();
    }
}
