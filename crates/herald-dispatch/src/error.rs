//! Error types for webhook dispatch
//!
//! Every variant is recoverable; the raw response body travels with the
//! shape-failure variants so the caller can surface it for debugging the
//! external automation.

use thiserror::Error;

/// Errors that can occur while dispatching to the automation webhook
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Network-level failure (DNS, refused connection, timeout)
    #[error("Webhook connection error: {0}")]
    Connection(String),

    /// Webhook answered with a non-2xx status
    #[error("Webhook returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Webhook answered 2xx with an empty body
    #[error("Webhook returned an empty response")]
    EmptyResponse,

    /// Webhook body was not parseable as JSON
    #[error("Webhook returned invalid JSON: {reason}")]
    InvalidJson {
        /// Parser message
        reason: String,
        /// Response body, verbatim
        raw: String,
    },

    /// Webhook JSON is missing one or more of the expected keys
    #[error("Webhook response missing expected keys: {}", missing.join(", "))]
    MissingFields {
        /// The keys that were absent or not strings
        missing: Vec<String>,
        /// The parsed response, for diagnostic display
        raw: serde_json::Value,
    },
}
