//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document extraction error
    #[error("Extraction error: {0}")]
    Extract(#[from] herald_extract::ExtractError),

    /// Insight analysis error
    #[error("Analysis error: {0}")]
    Insight(#[from] herald_insight::InsightError),

    /// Webhook dispatch error
    #[error("Automation error: {0}")]
    Dispatch(#[from] herald_dispatch::DispatchError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
