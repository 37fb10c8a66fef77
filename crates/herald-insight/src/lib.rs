//! Herald Insight
//!
//! Converts document text plus a question into a structured insight using a
//! completion API.
//!
//! # Overview
//!
//! The Analyzer is the second stage of the pipeline. It builds a prompt that
//! pins the model to a fixed JSON schema, calls the configured
//! `CompletionProvider`, and parses the response into a validated
//! [`herald_domain::Insight`]. Model output is unreliable, so parsing
//! tolerates markdown fences and surrounding prose, and a repair ladder
//! re-asks the model to fix malformed output before giving up.
//!
//! # Architecture
//!
//! ```text
//! Document text + question → PromptBuilder → CompletionProvider → parser → Insight
//!                                      ↑ repair ladder on parse failure ↓
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use herald_insight::{Analyzer, AnalyzerConfig};
//! use herald_domain::InsightRequest;
//! use herald_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{
//!     "key_points": ["point"],
//!     "risk_level": "Low",
//!     "risk_reason": "nothing notable",
//!     "summary": "All quiet."
//! }"#);
//!
//! let analyzer = Analyzer::new(provider, AnalyzerConfig::default());
//!
//! let request = InsightRequest {
//!     document_text: "The vendor accepts all liability.".to_string(),
//!     question: "Who carries the liability?".to_string(),
//! };
//!
//! let report = analyzer.analyze(request).await?;
//! println!("Risk: {}", report.insight.risk_level);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;
mod types;


pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::InsightError;
pub use parser::parse_insight;
pub use prompt::{PromptBuilder, REPAIR_INSTRUCTIONS, SYSTEM_INSTRUCTIONS};
pub use types::{AnalysisMetadata, InsightReport};
