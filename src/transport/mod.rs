//! Transports: the two interchangeable ways a command reaches the host.
//!
//! - [`CommandChannel`]: in-process dispatch to handlers the host registered.
//! - [`HttpTransport`]: JSON POST to the host's local REST endpoint.
//!
//! Which one services a call is decided once, from [`BridgeConfig::mode`],
//! when the facade is built. Nothing global selects it at call time.

pub mod channel;
pub mod errors;
pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::{BridgeConfig, TransportMode};

// Re-exports for convenience
pub use channel::CommandChannel;
pub use errors::BridgeError;
pub use http::HttpTransport;

/// A mechanism that carries one named command to the host and brings back
/// its result.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in log fields (`"command"`, `"http"`).
    fn kind(&self) -> &'static str;

    /// Issue `command` with the JSON argument record `args`.
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, BridgeError>;
}

/// Pick the transport named by `config.mode`.
///
/// The channel is passed in because its handlers are owned by the host; the
/// HTTP transport is built from the config.
pub fn select_transport(
    config: &BridgeConfig,
    channel: Arc<CommandChannel>,
) -> Result<Arc<dyn Transport>, BridgeError> {
    match config.mode {
        TransportMode::Command => {
            tracing::info!(commands = ?channel.commands(), "using in-process command channel");
            Ok(channel)
        }
        TransportMode::Http => {
            let http = HttpTransport::from_config(config)?;
            tracing::info!(base_url = %http.base_url(), "using HTTP transport");
            Ok(Arc::new(http))
        }
    }
}
