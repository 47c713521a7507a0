//! Integration tests for the REST surface, driven through the full router
//! with a mock messaging client behind the adapter.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use wpp_gateway::client::{
    Chat, ClientAdapter, ConnectionState, EventBus, MediaPayload, MessagingClient, SendReceipt,
};
use wpp_gateway::config::Config;
use wpp_gateway::error::{Error, Result};
use wpp_gateway::server::router;
use wpp_gateway::server::state::AppState;

struct MockClient {
    state: ConnectionState,
    registered: bool,
    chats: Vec<Chat>,
    fail_sends: bool,
    last_recipient: Mutex<Option<String>>,
}

impl MockClient {
    fn connected() -> Self {
        Self {
            state: ConnectionState::Connected,
            registered: true,
            chats: Vec::new(),
            fail_sends: false,
            last_recipient: Mutex::new(None),
        }
    }

    fn disconnected() -> Self {
        Self {
            state: ConnectionState::Opening,
            ..Self::connected()
        }
    }

    fn with_chats(mut self, chats: Vec<Chat>) -> Self {
        self.chats = chats;
        self
    }

    fn unregistered(mut self) -> Self {
        self.registered = false;
        self
    }

    fn failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    fn last_recipient(&self) -> Option<String> {
        self.last_recipient.lock().unwrap().clone()
    }

    fn record_send(&self, id: &str) -> Result<SendReceipt> {
        if self.fail_sends {
            return Err(Error::Send("client rejected the message".to_string()));
        }
        *self.last_recipient.lock().unwrap() = Some(id.to_string());
        Ok(SendReceipt {
            id: "true_123@c.us_ABCDEF".to_string(),
            recipient: id.to_string(),
            timestamp: 1_700_000_000,
        })
    }
}

#[async_trait]
impl MessagingClient for MockClient {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }
    async fn destroy(&self) -> Result<()> {
        Ok(())
    }
    async fn state(&self) -> Result<ConnectionState> {
        Ok(self.state)
    }
    async fn is_registered(&self, _id: &str) -> Result<bool> {
        Ok(self.registered)
    }
    async fn chats(&self) -> Result<Vec<Chat>> {
        Ok(self.chats.clone())
    }
    async fn send_text(&self, id: &str, _body: &str) -> Result<SendReceipt> {
        self.record_send(id)
    }
    async fn send_media(&self, id: &str, _media: MediaPayload) -> Result<SendReceipt> {
        self.record_send(id)
    }
    async fn clear_messages(&self, _id: &str) -> Result<()> {
        Ok(())
    }
}

fn app(client: Arc<MockClient>) -> Router {
    let adapter = Arc::new(ClientAdapter::new(client, EventBus::new()));
    router::build(AppState::new(adapter, Arc::new(Config::default())))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_true() {
    let (status, body) = get(app(Arc::new(MockClient::connected())), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["health"], "true");
}

#[tokio::test]
async fn api_docs_schema_lists_routes() {
    let (status, body) = get(
        app(Arc::new(MockClient::connected())),
        "/api-docs/openapi.json",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    for route in [
        "/",
        "/state",
        "/send-message",
        "/send-media",
        "/send-group-message",
        "/clear-message",
    ] {
        assert!(body["paths"].get(route).is_some(), "missing {route}");
    }
}

#[tokio::test]
async fn state_connected() {
    let (status, body) = get(app(Arc::new(MockClient::connected())), "/state").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "connected": true }));
}

#[tokio::test]
async fn state_not_connected_for_transitional_states() {
    let (status, body) = get(app(Arc::new(MockClient::disconnected())), "/state").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "state": "NotConnected" }));
}

#[tokio::test]
async fn send_message_empty_number_is_field_error() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected())),
        "/send-message",
        json!({ "number": "", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], false);
    assert_eq!(body["message"]["number"], "Invalid value");
    assert!(body["message"].get("message").is_none());
}

#[tokio::test]
async fn send_message_missing_fields_lists_both() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected())),
        "/send-message",
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"]["number"], "Invalid value");
    assert_eq!(body["message"]["message"], "Invalid value");
}

#[tokio::test]
async fn send_message_rejected_when_not_connected() {
    let (status, body) = post(
        app(Arc::new(MockClient::disconnected())),
        "/send-message",
        json!({ "number": "5511912345678", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "status": false, "message": "Client is not connected" }));
}

#[tokio::test]
async fn send_message_rejected_when_not_registered() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected().unregistered())),
        "/send-message",
        json!({ "number": "5511912345678", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "status": false, "message": "The number is not registered" }));
}

#[tokio::test]
async fn send_message_normalizes_recipient() {
    let client = Arc::new(MockClient::connected());
    let (status, body) = post(
        app(client.clone()),
        "/send-message",
        json!({ "number": "+55 (11) 91234-5678", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    assert_eq!(body["response"]["recipient"], "5511912345678@c.us");
    assert_eq!(client.last_recipient().as_deref(), Some("5511912345678@c.us"));
}

#[tokio::test]
async fn send_message_failure_is_500_with_detail() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected().failing_sends())),
        "/send-message",
        json!({ "number": "5511912345678", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], false);
    assert!(body["response"].as_str().unwrap().contains("rejected"));
}

#[tokio::test]
async fn send_media_validates_fields() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected())),
        "/send-media",
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"]["number"], "Invalid value");
    assert_eq!(body["message"]["file"], "Invalid value");
}

#[tokio::test]
async fn send_media_gated_on_connection() {
    let (status, body) = post(
        app(Arc::new(MockClient::disconnected())),
        "/send-media",
        json!({ "number": "5511912345678", "file": "http://example.com/cat.png" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Client is not connected");
}

#[tokio::test]
async fn group_message_requires_id_or_name() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected())),
        "/send-group-message",
        json!({ "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"]["id"], "Invalid value, you can use `id` or `name`");
}

#[tokio::test]
async fn group_message_requires_message() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected())),
        "/send-group-message",
        json!({ "id": "g1@g.us" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"]["message"], "Invalid value");
}

#[tokio::test]
async fn group_message_unknown_name_is_422() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected())),
        "/send-group-message",
        json!({ "name": "Friends", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "status": false, "message": "No group found with name: Friends" }));
}

#[tokio::test]
async fn group_message_resolves_name_case_insensitively() {
    let client = Arc::new(MockClient::connected().with_chats(vec![
        Chat {
            id: "111@c.us".to_string(),
            name: "friends".to_string(),
            is_group: false,
        },
        Chat {
            id: "g1@g.us".to_string(),
            name: "Friends".to_string(),
            is_group: true,
        },
    ]));
    let (status, body) = post(
        app(client.clone()),
        "/send-group-message",
        json!({ "name": "fRiEnDs", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    assert_eq!(client.last_recipient().as_deref(), Some("g1@g.us"));
}

#[tokio::test]
async fn group_message_by_id_skips_lookup() {
    let client = Arc::new(MockClient::connected());
    let (status, _body) = post(
        app(client.clone()),
        "/send-group-message",
        json!({ "id": "g9@g.us", "message": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(client.last_recipient().as_deref(), Some("g9@g.us"));
}

#[tokio::test]
async fn clear_message_validates_number() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected())),
        "/clear-message",
        json!({ "number": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"]["number"], "Invalid value");
}

#[tokio::test]
async fn clear_message_requires_registration() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected().unregistered())),
        "/clear-message",
        json!({ "number": "5511912345678" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "The number is not registered");
}

#[tokio::test]
async fn clear_message_acks() {
    let (status, body) = post(
        app(Arc::new(MockClient::connected())),
        "/clear-message",
        json!({ "number": "5511912345678" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": true, "response": true }));
}
