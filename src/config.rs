//! Bridge configuration loading.
//!
//! Reads `hostbridge.yaml`. The config decides which transport the facade is
//! built on; nothing else in the crate reads process-wide state to make that
//! choice.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::transport::BridgeError;

/// File name searched for by [`find_config_path`].
pub const CONFIG_FILE_NAME: &str = "hostbridge.yaml";

/// Default REST endpoint of the host runtime.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:13434";

// ─── Public Types ────────────────────────────────────────────────────────────

/// Which transport services facade calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// In-process command channel.
    #[default]
    Command,
    /// JSON POST to `api_base_url`.
    Http,
}

/// Top-level bridge configuration (mirrors `hostbridge.yaml`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub mode: TransportMode,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Total request timeout for the HTTP transport. Absent means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            mode: TransportMode::default(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
        }
    }
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Locate the config file.
///
/// Walks upward from `start` looking for `hostbridge.yaml`.
pub fn find_config_path(start: &Path) -> Result<PathBuf, BridgeError> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !dir.pop() {
            break;
        }
    }

    Err(BridgeError::ConfigError {
        reason: format!("could not find {CONFIG_FILE_NAME}"),
    })
}

/// Load and parse a bridge configuration file.
pub fn load_config(path: &Path) -> Result<BridgeConfig, BridgeError> {
    let raw = std::fs::read_to_string(path).map_err(|e| BridgeError::ConfigError {
        reason: format!("failed to read {}: {e}", path.display()),
    })?;

    parse_config(&raw)
}

/// Parse configuration text. An empty document yields the defaults.
pub fn parse_config(raw: &str) -> Result<BridgeConfig, BridgeError> {
    if raw.trim().is_empty() {
        return Ok(BridgeConfig::default());
    }

    let config: BridgeConfig =
        serde_yaml::from_str(raw).map_err(|e| BridgeError::ConfigError {
            reason: format!("failed to parse config: {e}"),
        })?;

    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://") {
        return Err(BridgeError::ConfigError {
            reason: format!("api_base_url must be an http(s) URL, got '{}'", config.api_base_url),
        });
    }

    Ok(config)
}

/// Find and load the config, falling back to defaults when none exists.
pub fn load_or_default(start: &Path) -> Result<BridgeConfig, BridgeError> {
    match find_config_path(start) {
        Ok(path) => {
            let config = load_config(&path)?;
            tracing::info!(path = %path.display(), mode = ?config.mode, "loaded bridge config");
            Ok(config)
        }
        Err(_) => {
            tracing::info!("no bridge config found, using defaults");
            Ok(BridgeConfig::default())
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.mode, TransportMode::Command);
        assert_eq!(config.api_base_url, "http://127.0.0.1:13434");
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_parse_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), BridgeConfig::default());
    }

    #[test]
    fn test_parse_http_mode() {
        let yaml = r#"
            mode: http
            api_base_url: "http://localhost:9000"
            request_timeout_secs: 10
        "#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.mode, TransportMode::Http);
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.request_timeout_secs, Some(10));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(parse_config("mode: carrier_pigeon").is_err());
    }

    #[test]
    fn test_parse_rejects_non_http_url() {
        let err = parse_config("api_base_url: ftp://host").unwrap_err();
        assert!(err.to_string().contains("api_base_url"));
    }

    #[test]
    fn test_placeholders_are_not_expanded() {
        let config = parse_config("api_base_url: \"http://${HOST}:13434\"").unwrap();
        assert_eq!(config.api_base_url, "http://${HOST}:13434");
    }

    #[test]
    fn test_find_and_load_from_parent_dir() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join(CONFIG_FILE_NAME), "mode: http\n").unwrap();
        let nested = root.path().join("ui").join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let path = find_config_path(&nested).unwrap();
        assert_eq!(path, root.path().join(CONFIG_FILE_NAME));
        assert_eq!(load_config(&path).unwrap().mode, TransportMode::Http);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, BridgeError::ConfigError { .. }));
    }
}
