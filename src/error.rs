//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Library service answered with a non-success status
    #[error("Library service error: {message}")]
    Status {
        /// Human-readable error description.
        message: String,
        /// HTTP status code of the response.
        status: u16,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a status error, attaching a hint for well-known codes
    pub fn status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            404 => Some("The requested track or route was not found"),
            503 => Some("The library database is not loaded yet - open the player first"),
            500..=599 => Some("Library service error - check the player's logs"),
            _ => None,
        };
        Self::Status {
            message: message.into(),
            status,
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn status_provides_hints() {
        let err = Error::status("Not found", 404);
        match err {
            Error::Status { hint: Some(h), status, .. } => {
                assert_eq!(status, 404);
                assert!(h.contains("not found"));
            }
            _ => panic!("Expected Status error with hint"),
        }
    }

    #[test]
    fn config_error_renders_hint() {
        let err = Error::config("LIBRARY_HOST is empty", "Unset it to use localhost");
        assert_eq!(
            err.to_string(),
            "Configuration error: LIBRARY_HOST is empty. Unset it to use localhost"
        );
    }
}
