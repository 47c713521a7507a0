use serde::{Deserialize, Serialize};

/// Default launch flags for the headless browser driving the client.
const DEFAULT_BROWSER_ARGS: [&str; 8] = [
    "--no-sandbox",
    "--disable-setuid-sandbox",
    "--disable-dev-shm-usage",
    "--disable-accelerated-2d-canvas",
    "--no-first-run",
    "--no-zygote",
    "--single-process",
    "--disable-gpu",
];

/// Process-wide gateway settings, read from the environment at startup and
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host address for the HTTP server (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the HTTP server (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log verbosity when RUST_LOG is not set (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Target URL for inbound-message webhook delivery
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Browser executable path handed to the client
    #[serde(default)]
    pub browser_path: Option<String>,

    /// Browser launch arguments handed to the client
    #[serde(default = "default_browser_args")]
    pub browser_args: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_browser_args() -> Vec<String> {
    DEFAULT_BROWSER_ARGS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            webhook_url: None,
            browser_path: None,
            browser_args: default_browser_args(),
        }
    }
}

impl Config {
    /// Read configuration from the environment. Unset or unparseable
    /// variables fall back to the defaults; this never fails.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log_level = level;
        }
        if let Ok(url) = std::env::var("WEBHOOKURL") {
            config.webhook_url = Some(url);
        }
        if let Ok(path) = std::env::var("CHROMIUM_PATH") {
            config.browser_path = Some(path);
        }
        if let Ok(args) = std::env::var("PPTRARGS") {
            config.browser_args = split_args(&args);
        }

        config
    }

    /// Returns the server bind address string (e.g., "0.0.0.0:8000").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated launch-argument override, dropping empty entries.
fn split_args(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
