pub mod router;
pub mod state;
pub mod ws;

use std::sync::Arc;

use crate::client::ClientAdapter;
use crate::config::Config;
use crate::error::{Error, Result};

/// Bind and serve the HTTP surface until the process exits.
pub async fn start(config: Arc<Config>, adapter: Arc<ClientAdapter>) -> Result<()> {
    let bind_addr = config.bind_address();
    let app_state = state::AppState::new(adapter, config);

    let app = router::build(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {bind_addr}: {e}")))?;

    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Server error: {e}")))?;

    Ok(())
}
