//! HTTP fallback transport.
//!
//! Posts each command as JSON to `{base_url}/{command}` on the host's local
//! REST endpoint. One request per call: no retry, no fallback chain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;

use super::errors::BridgeError;
use super::Transport;
use crate::config::BridgeConfig;

// ─── HttpTransport ───────────────────────────────────────────────────────────

/// Client for the host's REST endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport from the bridge configuration.
    ///
    /// Does NOT check connectivity; that happens on the first request.
    /// System proxies are bypassed: the endpoint is the host's own server.
    pub fn from_config(config: &BridgeConfig) -> Result<Self, BridgeError> {
        let mut builder = HttpClient::builder().no_proxy();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| BridgeError::ConnectionFailed {
            endpoint: config.api_base_url.clone(),
            reason: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self::with_client(http, &config.api_base_url))
    }

    /// Build a transport around an existing `reqwest` client.
    pub fn with_client(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `payload` as JSON to `{base_url}/{endpoint}` and return the
    /// parsed JSON body.
    ///
    /// On a non-2xx status the error text is the body's `message` field when
    /// present, otherwise `HTTP Error <status>`.
    pub async fn post<P>(&self, endpoint: &str, payload: &P) -> Result<Value, BridgeError>
    where
        P: Serialize + ?Sized,
    {
        let url = format!("{}/{endpoint}", self.base_url);

        tracing::debug!(url = %url, "=== HTTP REQUEST ===");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| BridgeError::ConnectionFailed {
                endpoint: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = error_message(status.as_u16(), &body_text);
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                message = %message,
                "host returned error status"
            );
            return Err(BridgeError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body_text = response.text().await.map_err(|e| BridgeError::Decode {
            command: endpoint.to_string(),
            reason: format!("failed to read response body: {e}"),
        })?;

        serde_json::from_str(&body_text).map_err(|e| BridgeError::Decode {
            command: endpoint.to_string(),
            reason: format!("response is not JSON: {e}"),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn kind(&self) -> &'static str {
        "http"
    }

    /// The command name is the endpoint; the command's value is the `result`
    /// field of the response body.
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, BridgeError> {
        let mut body = self.post(command, &args).await?;

        match body.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(BridgeError::Decode {
                command: command.to_string(),
                reason: "response body has no 'result' field".into(),
            }),
        }
    }
}

// ─── Error Body ──────────────────────────────────────────────────────────────

/// Derive the error text for a non-2xx response.
///
/// A body that isn't JSON, or has no non-empty string `message`, falls back to
/// the generic status text.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("HTTP Error {status}"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
