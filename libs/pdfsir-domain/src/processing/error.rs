//! Domain errors for processing requests
//!
//! This module defines every failure a processing request can end in.
//! Adapters convert their own errors (HTTP client, JSON decoding) into these
//! variants so the HTTP layer only ever deals with one taxonomy.

use thiserror::Error;

const MIB: u64 = 1024 * 1024;

/// Errors that can occur while describing or processing a tool request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    /// The request is missing data or carries malformed data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The uploaded file exceeds the configured limit
    #[error("File size ({size} bytes) exceeds maximum allowed ({max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// No tool is registered under this identifier
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The service is missing configuration needed for processing
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The provider failed, answered with an error status or flagged an error
    #[error("Provider error: {0}")]
    Upstream(String),

    /// An unexpected internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProcessingError {
    /// Create an invalid input error with a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a file too large error
    pub fn too_large(size: u64, max: u64) -> Self {
        Self::TooLarge { size, max }
    }

    /// Create a tool not found error for the given identifier
    pub fn tool_not_found(tool_id: impl Into<String>) -> Self {
        Self::ToolNotFound(tool_id.into())
    }

    /// Create a config error with a message
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an upstream error with the provider's message
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create an internal error with a message
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Message returned to API clients
    ///
    /// Unlike `Display`, this carries no variant prefix: provider messages are
    /// passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::TooLarge { max, .. } if max % MIB == 0 => {
                format!("File size too large. Maximum size is {}MB.", max / MIB)
            }
            Self::TooLarge { max, .. } => {
                format!("File size too large. Maximum size is {} bytes.", max)
            }
            Self::ToolNotFound(_) => "Tool not found".to_string(),
            Self::ConfigError(msg) | Self::Upstream(msg) | Self::Internal(msg) => msg.clone(),
        }
    }

    /// Whether the error stems from the request itself rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::TooLarge { .. } | Self::ToolNotFound(_)
        )
    }
}

/// Result type alias for processing operations
pub type Result<T> = std::result::Result<T, ProcessingError>;
