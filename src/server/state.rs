use std::sync::Arc;

use crate::client::ClientAdapter;
use crate::config::Config;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<ClientAdapter>,
    pub config: Arc<Config>,
    /// Outbound HTTP client for remote media fetches.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(adapter: Arc<ClientAdapter>, config: Arc<Config>) -> Self {
        Self {
            adapter,
            config,
            http: reqwest::Client::new(),
        }
    }
}
