//! hostbridge: client-side bridge between a UI layer and its host runtime.
//!
//! The UI calls the typed [`Commands`] facade; each call goes either through
//! the in-process [`CommandChannel`] or over HTTP to the host's local REST
//! endpoint, as chosen by [`BridgeConfig`]. [`GlobalState`] keeps the two
//! UI-bound text fields in sync with the host's files.

pub mod commands;
pub mod config;
pub mod events;
pub mod state;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use commands::Commands;
pub use config::{BridgeConfig, TransportMode};
pub use events::{prevent_default, UiEvent};
pub use state::{GlobalState, SubscriptionId};
pub use transport::{BridgeError, CommandChannel, HttpTransport, Transport};
pub use types::{FileId, StateField, VoiceResult};

/// Install a `tracing` subscriber writing to stderr.
///
/// Honors `RUST_LOG`; defaults to `hostbridge=info,warn`. Safe to call more
/// than once, and a no-op when the embedding host already installed its own
/// subscriber.
pub fn init_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hostbridge=info,warn"));

    let installed = fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "=== hostbridge starting ===");
    }
}
