//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    // ─────────────────────────────────────────────────────────────
    // Remote API Errors
    // ─────────────────────────────────────────────────────────────
    /// The only remote failure kind. Network failures, non-2xx responses
    /// and undecodable payloads all land here.
    #[error("Remote request failed: {message}")]
    RemoteRequest { message: String },

    // ─────────────────────────────────────────────────────────────
    // Routing Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid route: {path}")]
    InvalidRoute { path: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteRequest {
            message: message.into(),
        }
    }

    pub fn invalid_route(path: impl Into<String>) -> Self {
        Self::InvalidRoute { path: path.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Prefix the message of the message-carrying variants with `context`.
    /// `Io`, `Json` and `InvalidRoute` are returned unchanged.
    fn prefixed(self, context: &str) -> Self {
        let prefix = |message: String| format!("{}: {}", context, message);
        match self {
            Error::Terminal { message } => Error::Terminal {
                message: prefix(message),
            },
            Error::Logging { message } => Error::Logging {
                message: prefix(message),
            },
            Error::RemoteRequest { message } => Error::RemoteRequest {
                message: prefix(message),
            },
            Error::Config { message } => Error::Config {
                message: prefix(message),
            },
            other => other,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Prefix the error with what was being attempted and log it
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into().prefixed(&context.into());
            tracing::error!("{}", err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::remote("connection refused");
        assert_eq!(err.to_string(), "Remote request failed: connection refused");

        let err = Error::invalid_route("/nowhere");
        assert!(err.to_string().contains("/nowhere"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_context_prefixes_message_and_keeps_kind() {
        let result: std::result::Result<(), Error> = Err(Error::remote("HTTP 500"));
        let err = result.context("Fetching page 3").unwrap_err();
        assert!(matches!(err, Error::RemoteRequest { .. }));
        assert_eq!(err.to_string(), "Remote request failed: Fetching page 3: HTTP 500");
    }

    #[test]
    fn test_context_converts_io_error_unchanged() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.context("Reading config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: denied");
    }

    #[test]
    fn test_context_leaves_invalid_route_alone() {
        let result: Result<()> = Err(Error::invalid_route("/nowhere"));
        let err = result.context("Parsing start route").unwrap_err();
        assert_eq!(err.to_string(), "Invalid route: /nowhere");
    }
}
