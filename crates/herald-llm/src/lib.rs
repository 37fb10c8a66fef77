//! Herald Completion Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `herald-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenRouterProvider`: Hosted OpenAI-compatible chat-completions API
//!
//! # Examples
//!
//! ```
//! use herald_llm::MockProvider;
//! use herald_domain::traits::CompletionProvider;
//!
//! let provider = MockProvider::new("Hello from the model!");
//! let result = provider.complete("system", "user prompt").unwrap();
//! assert_eq!(result, "Hello from the model!");
//! ```

#![warn(missing_docs)]

pub mod openrouter;

use herald_domain::traits::CompletionProvider as CompletionProviderTrait;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openrouter::OpenRouterProvider;

/// Errors that can occur during completion operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the completion API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API key rejected
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Completion error: {0}")]
    Other(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses resolve in order of precedence: the script queue (one entry per
/// call), then a response keyed on the user message, then the default.
///
/// # Examples
///
/// ```
/// use herald_llm::MockProvider;
/// use herald_domain::traits::CompletionProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.complete("sys", "anything").unwrap(), "Fixed response");
///
/// // Scripted responses, one per call - useful for exercising retry ladders
/// let provider = MockProvider::scripted(["first", "second"]);
/// assert_eq!(provider.complete("sys", "a").unwrap(), "first");
/// assert_eq!(provider.complete("sys", "b").unwrap(), "second");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    script: Arc<Mutex<VecDeque<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that replays the given responses one call at a time
    ///
    /// Once the script is exhausted, the last entry repeats.
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script: VecDeque<String> = responses.into_iter().map(Into::into).collect();
        let default = script.back().cloned().unwrap_or_default();

        Self {
            default_response: default,
            responses: Arc::new(Mutex::new(HashMap::new())),
            script: Arc::new(Mutex::new(script)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given user message
    pub fn add_response(&mut self, user: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user.into(), response.into());
    }

    /// Configure an error for a specific user message
    pub fn add_error(&mut self, user: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user.into(), "ERROR".to_string());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProviderTrait for MockProvider {
    type Error = LlmError;

    fn complete(&self, _system: &str, user: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        // Script queue takes precedence; the last entry repeats once drained
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return Ok(next);
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(user) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
