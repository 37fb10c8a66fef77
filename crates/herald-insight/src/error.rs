//! Error types for the Analyzer

use thiserror::Error;

/// Errors that can occur during insight analysis
#[derive(Error, Debug)]
pub enum InsightError {
    /// Completion provider error
    #[error("Completion error: {0}")]
    Llm(String),

    /// Analysis timeout
    #[error("Analysis timeout")]
    Timeout,

    /// Model returned an empty response
    #[error("Empty model response")]
    EmptyResponse,

    /// Model response contained no JSON object
    #[error("No JSON detected in model response")]
    NoJsonFound,

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Response parsed as JSON but not as a valid insight
    #[error("Invalid insight format: {0}")]
    InvalidFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for InsightError {
    fn from(e: serde_json::Error) -> Self {
        InsightError::JsonParse(e.to_string())
    }
}
