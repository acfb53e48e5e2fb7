//! Typed command facade.
//!
//! Each method is a single round trip through the configured transport: it
//! encodes a fixed argument record, forwards it under a fixed command name,
//! and decodes the result. Transport failures are returned unchanged.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BridgeConfig;
use crate::transport::{select_transport, BridgeError, CommandChannel, Transport};
use crate::types::{AddArgs, ChatArgs, FileId, ReadArgs, VoiceArgs, VoiceResult, WriteArgs};

/// Host command names.
pub mod names {
    pub const ADD: &str = "add";
    pub const LLM_INFER: &str = "llm_infer";
    pub const GENERATE_VOICE: &str = "generate_voice";
    pub const READ: &str = "read";
    pub const WRITE: &str = "write";
}

/// Facade over the host's commands.
#[derive(Clone)]
pub struct Commands {
    transport: Arc<dyn Transport>,
}

impl Commands {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build the facade on whichever transport `config.mode` selects.
    pub fn from_config(
        config: &BridgeConfig,
        channel: Arc<CommandChannel>,
    ) -> Result<Self, BridgeError> {
        Ok(Self::new(select_transport(config, channel)?))
    }

    /// Which transport calls go through (`"command"` or `"http"`).
    pub fn transport_kind(&self) -> &'static str {
        self.transport.kind()
    }

    /// Ask the host to add two numbers. Inputs are not validated; non-finite
    /// values are forwarded as JSON encodes them.
    pub async fn add(&self, a: f64, b: f64) -> Result<f64, BridgeError> {
        self.call(names::ADD, &AddArgs { a, b }).await
    }

    /// Send a prompt for inference and return the response text.
    pub async fn chat(&self, prompt: &str) -> Result<String, BridgeError> {
        self.call(
            names::LLM_INFER,
            &ChatArgs {
                prompt: prompt.to_string(),
            },
        )
        .await
    }

    /// Synthesise speech for `text`.
    pub async fn generate_voice(&self, text: &str) -> Result<VoiceResult, BridgeError> {
        self.call(
            names::GENERATE_VOICE,
            &VoiceArgs {
                text: text.to_string(),
            },
        )
        .await
    }

    /// Load the text content of `file`.
    pub async fn read(&self, file: FileId) -> Result<String, BridgeError> {
        self.call(names::READ, &ReadArgs { path: file }).await
    }

    /// Persist `contents` to `file`. Whatever the host returns is discarded.
    pub async fn write(&self, file: FileId, contents: &str) -> Result<(), BridgeError> {
        let args = WriteArgs {
            path: file,
            contents: contents.to_string(),
        };
        self.invoke_raw(names::WRITE, &args).await.map(|_| ())
    }

    async fn call<A, R>(&self, command: &str, args: &A) -> Result<R, BridgeError>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        let value = self.invoke_raw(command, args).await?;
        serde_json::from_value(value).map_err(|e| BridgeError::Decode {
            command: command.to_string(),
            reason: e.to_string(),
        })
    }

    async fn invoke_raw<A: Serialize>(
        &self,
        command: &str,
        args: &A,
    ) -> Result<serde_json::Value, BridgeError> {
        let args = serde_json::to_value(args).map_err(|e| BridgeError::Serialize {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(command, transport = self.transport.kind(), "invoking host command");
        self.transport.invoke(command, args).await
    }
}

impl std::fmt::Debug for Commands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commands")
            .field("transport", &self.transport.kind())
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
