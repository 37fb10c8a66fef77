//! Webhook dispatcher implementation

use crate::error::DispatchError;
use crate::validate::outcome_from_value;
use herald_domain::{AutomationOutcome, AutomationPayload};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Default timeout for the webhook call (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Dispatches automation payloads to the configured webhook URL
///
/// One synchronous POST per dispatch, no retry, no backoff. The automation
/// is expected to answer `200` with a JSON body containing `final_answer`,
/// `email_body`, and `email_status`.
pub struct WebhookDispatcher {
    url: String,
    client: reqwest::Client,
}

impl WebhookDispatcher {
    /// Create a dispatcher with the default timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a dispatcher with an explicit timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder().timeout(timeout).build().unwrap();

        Self {
            url: url.into(),
            client,
        }
    }

    /// The configured webhook URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the payload and validate the response shape
    ///
    /// # Errors
    ///
    /// - `Connection` on network failure or timeout
    /// - `Http` on a non-2xx status
    /// - `EmptyResponse` when a 2xx answer has no body
    /// - `InvalidJson` when the body is not JSON (raw body preserved)
    /// - `MissingFields` when any expected key is absent (parsed body
    ///   preserved)
    pub async fn dispatch(
        &self,
        payload: &AutomationPayload,
    ) -> Result<AutomationOutcome, DispatchError> {
        debug!("Dispatching automation payload to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| DispatchError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::Connection(e.to_string()))?;

        if !status.is_success() {
            return Err(DispatchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Err(DispatchError::EmptyResponse);
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| DispatchError::InvalidJson {
                reason: e.to_string(),
                raw: body.clone(),
            })?;

        match outcome_from_value(&value) {
            Ok(outcome) => {
                info!("Automation reported email status '{}'", outcome.email_status);
                Ok(outcome)
            }
            Err(missing) => Err(DispatchError::MissingFields {
                missing,
                raw: value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatcher_creation() {
        let dispatcher = WebhookDispatcher::new("https://automation.example.com/webhook");
        assert_eq!(dispatcher.url(), "https://automation.example.com/webhook");
    }

    #[tokio::test]
    async fn test_dispatch_connection_refused() {
        use herald_domain::{Insight, RiskLevel};

        // Port 1 is never listening
        let dispatcher = WebhookDispatcher::new("http://127.0.0.1:1/webhook");

        let payload = AutomationPayload {
            document_text: "Test".to_string(),
            question: "Test?".to_string(),
            structured_data: Insight {
                key_points: vec!["p".to_string()],
                risk_level: RiskLevel::Low,
                risk_reason: "r".to_string(),
                summary: "s".to_string(),
            },
            recipient_email: "test@example.com".to_string(),
        };

        let result = dispatcher.dispatch(&payload).await;
        assert!(matches!(result, Err(DispatchError::Connection(_))));
    }
}
