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

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Generation Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No API key found. Set the {env_var} environment variable.")]
    MissingApiKey { env_var: String },

    #[error("HTTP transport error: {message}")]
    Http { message: String },

    #[error("Generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Generation service returned no content")]
    EmptyResponse,

    #[error("Malformed brand identity: {message}")]
    MalformedIdentity { message: String },

    #[error("Generation request was cancelled")]
    Cancelled,

    // ─────────────────────────────────────────────────────────────
    // Host Integration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Export failed: {message}")]
    Export { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
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

    pub fn missing_api_key(env_var: impl Into<String>) -> Self {
        Self::MissingApiKey {
            env_var: env_var.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn malformed_identity(message: impl Into<String>) -> Self {
        Self::MalformedIdentity {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors surface as an alert or status message and leave
    /// the application running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Http { .. }
                | Error::Api { .. }
                | Error::EmptyResponse
                | Error::MalformedIdentity { .. }
                | Error::Json(_)
                | Error::Cancelled
                | Error::Clipboard { .. }
                | Error::Export { .. }
                | Error::ChannelSend { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
