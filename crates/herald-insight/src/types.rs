//! Result types for analysis

use herald_domain::Insight;

/// Result of a successful analysis
#[derive(Debug, Clone)]
pub struct InsightReport {
    /// The validated structured insight
    pub insight: Insight,

    /// Metadata about how the insight was produced
    pub metadata: AnalysisMetadata,
}

/// Metadata about an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Name of the model used
    pub model_name: String,

    /// How many ladder attempts it took to get a valid insight
    pub attempts: u32,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}
