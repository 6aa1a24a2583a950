//! Error types for agentchat.

use thiserror::Error;

/// Failure of a single agent turn.
///
/// Every turn resolves to a reply or one of these; callers render the
/// error inline and keep the conversation going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// A required agent field was left blank. Raised before any network I/O.
    #[error("Configuration error: missing {0}")]
    MissingField(String),

    /// The remote client is unavailable. Raised before any network I/O.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport or decoding fault while talking to the agent.
    #[error("Error querying agent: {0}")]
    Gateway(String),
}

impl GatewayError {
    /// Error for a required agent field that was left blank.
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField(field.to_string())
    }

    /// Error for a remote client that could not be constructed.
    pub fn client_unavailable(reason: impl Into<String>) -> Self {
        Self::Configuration(format!(
            "agent client not initialized ({}). Check your AWS credentials and region",
            reason.into()
        ))
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway(message.into())
    }

    /// Both missing fields and an unavailable client are configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::Configuration(_))
    }
}

/// Primary error type for the binary and its setup paths.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Line editor error: {0}")]
    Readline(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ChatError>;
