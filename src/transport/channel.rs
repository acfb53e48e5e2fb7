//! In-process command channel.
//!
//! The host registers one async handler per command name; the UI side invokes
//! them by name with a JSON argument record. A missing handler or a handler
//! returning `Err` is a rejection, and the rejection reason is passed through
//! to the caller unchanged.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::errors::BridgeError;
use super::Transport;

type Handler = Box<dyn Fn(Value) -> BoxFuture<'static, Result<Value, String>> + Send + Sync>;

/// Registry of named host command handlers.
#[derive(Default)]
pub struct CommandChannel {
    handlers: HashMap<String, Handler>,
}

impl CommandChannel {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw JSON handler. Replaces any handler already registered
    /// under `name`.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, String>> + Send + 'static,
    {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            tracing::warn!(command = %name, "replacing existing command handler");
        }
        self.handlers
            .insert(name, Box::new(move |args| handler(args).boxed()));
        self
    }

    /// Register a handler with typed arguments and result.
    ///
    /// Arguments that do not decode into `A` reject the call without reaching
    /// the handler.
    pub fn register_typed<A, R, F, Fut>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        A: DeserializeOwned + Send + 'static,
        R: Serialize + Send + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, String>> + Send + 'static,
    {
        let name = name.into();
        let label = name.clone();
        self.register(name, move |args: Value| {
            let decoded = serde_json::from_value::<A>(args)
                .map_err(|e| format!("invalid arguments for '{label}': {e}"));
            let call = decoded.map(&handler);
            async move {
                let result = call?.await?;
                serde_json::to_value(result).map_err(|e| e.to_string())
            }
        })
    }

    /// Whether a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn commands(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for CommandChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandChannel")
            .field("commands", &self.commands())
            .finish()
    }
}

#[async_trait]
impl Transport for CommandChannel {
    fn kind(&self) -> &'static str {
        "command"
    }

    async fn invoke(&self, command: &str, args: Value) -> Result<Value, BridgeError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| BridgeError::UnknownCommand {
                command: command.to_string(),
            })?;

        handler(args)
            .await
            .map_err(|reason| BridgeError::CommandRejected {
                command: command.to_string(),
                reason,
            })
    }
}
