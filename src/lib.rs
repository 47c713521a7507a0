//! # wpp-gateway
//!
//! A thin HTTP/WebSocket gateway in front of a browser-automation backed
//! WhatsApp Web client.
//!
//! The heavy lifting (session persistence, browser automation, the wire
//! protocol to the messaging network) lives entirely inside the external
//! client behind the [`client::MessagingClient`] trait. What this crate adds
//! is the orchestration shell:
//!
//! - request validation and phone/group identifier normalization,
//! - connection-state gating before side-effecting calls,
//! - a REST surface mapping client outcomes to a uniform JSON envelope,
//! - a WebSocket push channel relaying client lifecycle events (QR pairing
//!   challenge, loading progress, ready, authenticated, disconnect) to every
//!   connected UI session,
//! - best-effort webhook delivery of inbound messages.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod qr;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
