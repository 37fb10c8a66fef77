//! Risk level - the conditional trigger forwarded to the automation webhook

use serde::{Deserialize, Serialize};

/// Risk level assigned to a document by the insight analysis
///
/// The automation webhook uses this value for its conditional logic (for
/// example, only sending an alert email for `High`). Herald itself attaches
/// no behavior to the level beyond carrying it through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// No notable exposure identified
    Low,

    /// Some exposure, worth a human look
    Medium,

    /// Significant exposure, expected to trigger an alert
    High,
}

impl RiskLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Parse a level from a string, case-insensitively
    ///
    /// Model output is not reliable about casing, so `"HIGH"`, `"high"` and
    /// `"High"` all parse.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid risk level: {}", s))
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
