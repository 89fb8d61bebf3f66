//! Error types for Promptr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Promptr
#[derive(Debug, Error)]
pub enum PromptrError {
    /// Template not found in the store
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template file failed to parse (startup-fatal)
    #[error("Failed to parse template '{file}': {message}")]
    TemplateParse { file: String, message: String },

    /// Template directory could not be read (startup-fatal)
    #[error("Failed to load template directory: {0}")]
    DirectoryLoad(String),

    /// Provider identifier not present in the gateway registry
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Provider call failed; wraps any underlying provider failure
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PromptrError {
    /// Normalize an underlying provider failure into a `Provider` error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        PromptrError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for Promptr operations
pub type Result<T> = std::result::Result<T, PromptrError>;
