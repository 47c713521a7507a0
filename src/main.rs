use std::sync::Arc;

use clap::Parser;

use wpp_gateway::client::{supervisor, BrowserClient, ClientAdapter, EventBus};
use wpp_gateway::config::Config;
use wpp_gateway::{logging, server};

#[derive(Parser)]
#[command(name = "wpp-gateway")]
#[command(version)]
#[command(about = "HTTP and WebSocket gateway for a WhatsApp Web client")]
struct Cli {
    /// Host to bind to (overrides the environment-derived config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the environment-derived config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::from_env();

    let cli = Cli::parse();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    // Guard must outlive the server or buffered file-sink lines are lost.
    let _log_guard = logging::init(&config.log_level)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %config.bind_address(),
        "Starting wpp-gateway"
    );

    let config = Arc::new(config);
    let events = EventBus::new();
    let client = Arc::new(BrowserClient::new(config.clone(), events.clone()));
    let adapter = Arc::new(ClientAdapter::new(client, events));

    // Lifecycle relay: logging, webhook delivery, disconnect recovery.
    supervisor::spawn(adapter.clone(), config.clone());

    // Startup initialization; the server still serves (with not-connected
    // gating) if the client cannot come up yet.
    if let Err(e) = adapter.initialize().await {
        tracing::error!(error = %e, "Messaging client failed to initialize");
    }

    server::start(config, adapter).await?;

    Ok(())
}
