//! Bridge error types.
//!
//! All errors implement `std::error::Error` via `thiserror`. Nothing in the
//! bridge recovers from these; they surface to the caller unchanged so the UI
//! layer can display them.

use thiserror::Error;

/// Errors that can occur while forwarding a command to the host.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The in-process channel has no handler registered under this name.
    #[error("unknown command: {command}")]
    UnknownCommand {
        command: String,
    },

    /// The host handler rejected the call. The reason is passed through as-is.
    #[error("{reason}")]
    CommandRejected {
        command: String,
        reason: String,
    },

    /// Non-2xx HTTP response. `message` is either the server-supplied
    /// `message` field or `HTTP Error <status>`.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
    },

    /// TCP/HTTP connection to the host endpoint failed.
    #[error("connection failed to {endpoint}: {reason}")]
    ConnectionFailed {
        endpoint: String,
        reason: String,
    },

    /// The host answered, but the payload did not have the expected shape.
    #[error("failed to decode result of '{command}': {reason}")]
    Decode {
        command: String,
        reason: String,
    },

    /// The argument record could not be encoded as JSON.
    #[error("failed to encode arguments of '{command}': {reason}")]
    Serialize {
        command: String,
        reason: String,
    },

    /// Configuration loading or validation error.
    #[error("config error: {reason}")]
    ConfigError {
        reason: String,
    },
}

impl BridgeError {
    /// HTTP status code, if this error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            BridgeError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Name of the command the failure belongs to, when known.
    pub fn command(&self) -> Option<&str> {
        match self {
            BridgeError::UnknownCommand { command }
            | BridgeError::CommandRejected { command, .. }
            | BridgeError::Decode { command, .. }
            | BridgeError::Serialize { command, .. } => Some(command),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_message_only() {
        let err = BridgeError::Http {
            status: 500,
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "bad");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_rejection_displays_reason_unchanged() {
        let err = BridgeError::CommandRejected {
            command: "write".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(err.command(), Some("write"));
    }

    #[test]
    fn test_status_non_http() {
        let err = BridgeError::UnknownCommand {
            command: "nope".to_string(),
        };
        assert!(err.status().is_none());
        assert_eq!(err.to_string(), "unknown command: nope");
    }

    #[test]
    fn test_command_absent_for_connection_failure() {
        let err = BridgeError::ConnectionFailed {
            endpoint: "http://127.0.0.1:1/add".into(),
            reason: "refused".into(),
        };
        assert!(err.command().is_none());
    }
}
