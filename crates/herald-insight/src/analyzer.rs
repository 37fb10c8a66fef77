//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::InsightError;
use crate::parser::parse_insight;
use crate::prompt::{PromptBuilder, REPAIR_INSTRUCTIONS, SYSTEM_INSTRUCTIONS};
use crate::types::{AnalysisMetadata, InsightReport};
use herald_domain::traits::CompletionProvider;
use herald_domain::InsightRequest;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Analyzer converts document text plus a question into a structured
/// insight
pub struct Analyzer<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    config: AnalyzerConfig,
    model_name: String,
}

impl<P> Analyzer<P>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    /// Create a new Analyzer
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Create a new Analyzer with a specific model name in its metadata
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Analyze a document against a question
    ///
    /// Runs the repair ladder: the initial call, then a repair call carrying
    /// the malformed output back to the model, then one final retry of the
    /// original prompt. The last error wins if every attempt fails.
    pub async fn analyze(&self, request: InsightRequest) -> Result<InsightReport, InsightError> {
        let start = Instant::now();

        info!(
            "Starting analysis, question '{}', document length {}",
            request.question,
            request.document_text.len()
        );

        let prompt = PromptBuilder::new(request.document_text, request.question)
            .with_max_document_chars(self.config.max_document_chars)
            .build();

        debug!("Prompt length: {} chars", prompt.len());

        let mut attempts = 0;
        let mut last_error = None;
        let mut malformed: Option<String> = None;

        while attempts < self.config.max_attempts {
            attempts += 1;

            // Attempt 2 repairs the raw output from attempt 1 when there is
            // any; every other attempt re-sends the original prompt
            let (system, user) = match (attempts, &malformed) {
                (2, Some(raw)) => (REPAIR_INSTRUCTIONS, raw.clone()),
                _ => (SYSTEM_INSTRUCTIONS, prompt.clone()),
            };

            match self.call_model(system.to_string(), user).await {
                Ok(response) => {
                    debug!("Model response length: {} chars", response.len());

                    match parse_insight(&response) {
                        Ok(insight) => {
                            info!("Analysis complete after {} attempt(s)", attempts);

                            return Ok(InsightReport {
                                insight,
                                metadata: AnalysisMetadata {
                                    model_name: self.model_name.clone(),
                                    attempts,
                                    processing_time_ms: start.elapsed().as_millis() as u64,
                                },
                            });
                        }
                        Err(e) => {
                            warn!("Attempt {} produced unusable output: {}", attempts, e);
                            malformed = Some(response);
                            last_error = Some(e);
                        }
                    }
                }
                Err(e) => {
                    warn!("Attempt {} failed: {}", attempts, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| InsightError::Llm("No attempts were made".to_string())))
    }

    /// Call the completion provider with the configured timeout
    async fn call_model(&self, system: String, user: String) -> Result<String, InsightError> {
        let provider = Arc::clone(&self.provider);

        // The provider trait is sync, so bridge through a blocking task
        let call = tokio::task::spawn_blocking(move || {
            provider
                .complete(&system, &user)
                .map_err(|e| InsightError::Llm(e.to_string()))
        });

        timeout(self.config.completion_timeout(), call)
            .await
            .map_err(|_| InsightError::Timeout)?
            .map_err(|e| InsightError::Llm(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_llm::MockProvider;

    const VALID_INSIGHT: &str = r#"{
        "key_points": ["the vendor indemnifies the customer"],
        "risk_level": "Low",
        "risk_reason": "liability sits with the vendor",
        "summary": "The vendor carries the liability."
    }"#;

    fn request() -> InsightRequest {
        InsightRequest {
            document_text: "The vendor shall indemnify the customer.".to_string(),
            question: "Who carries the liability?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_analyze_first_attempt() {
        let analyzer = Analyzer::new(MockProvider::new(VALID_INSIGHT), AnalyzerConfig::default());

        let report = analyzer.analyze(request()).await.unwrap();
        assert_eq!(report.metadata.attempts, 1);
        assert_eq!(report.insight.key_points.len(), 1);
    }

    #[tokio::test]
    async fn test_analyze_single_attempt_config() {
        let provider = MockProvider::scripted(["not json at all"]);
        let analyzer = Analyzer::new(provider.clone(), AnalyzerConfig::fast());

        let result = analyzer.analyze(request()).await;
        assert!(result.is_err());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_model_error_surfaces() {
        let mut provider = MockProvider::default();
        let prompt = PromptBuilder::new(
            request().document_text,
            request().question,
        )
        .with_max_document_chars(AnalyzerConfig::default().max_document_chars)
        .build();
        provider.add_error(&prompt);

        let analyzer = Analyzer::new(provider, AnalyzerConfig::default());
        // All attempts hit the configured error
        let result = analyzer.analyze(request()).await;
        assert!(matches!(result, Err(InsightError::Llm(_))));
    }
}
