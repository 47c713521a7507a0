//! Process-wide logging: console plus a daily-rotated file sink.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Directory the rotated log files land in.
const LOG_DIR: &str = "./logs";
/// Rotated file name prefix (files come out as `wpp.log.YYYY-MM-DD`).
const LOG_PREFIX: &str = "wpp.log";

/// Initialize the global subscriber with a console layer and a daily-rotated
/// file layer. `RUST_LOG` wins over the configured level.
///
/// The returned guard owns the non-blocking file writer; the caller must
/// keep it alive for the process lifetime or buffered lines are lost on
/// shutdown.
pub fn init(log_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(Path::new(LOG_DIR))?;

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_constants() {
        assert_eq!(LOG_DIR, "./logs");
        assert_eq!(LOG_PREFIX, "wpp.log");
    }

    #[test]
    fn test_init_creates_log_dir_and_returns_guard() {
        let guard = init("debug").unwrap();
        assert!(Path::new(LOG_DIR).is_dir());
        drop(guard);
    }
}
