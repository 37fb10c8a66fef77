//! Insight module - the structured answer extracted from a document

use crate::risk::RiskLevel;
use serde::{Deserialize, Serialize};

/// Request to analyze a document against a question
///
/// Ephemeral - exists only for the duration of one completion round trip.
#[derive(Debug, Clone)]
pub struct InsightRequest {
    /// Full extracted document text
    pub document_text: String,

    /// The user's analytical question about the document
    pub question: String,
}

/// The structured insight extracted from a document
///
/// This is the `structured_data` object forwarded to the automation webhook.
/// The field set is fixed: the completion API is instructed to return exactly
/// this shape and `herald-insight` validates it field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Discrete takeaways from the document, in source order
    pub key_points: Vec<String>,

    /// Assessed risk level, used by the webhook's conditional logic
    pub risk_level: RiskLevel,

    /// One-sentence justification for the risk level
    pub risk_reason: String,

    /// Short prose summary answering the question
    pub summary: String,
}

impl Insight {
    /// Validate that the insight is usable
    ///
    /// The completion API occasionally returns the right shape with empty
    /// content; an insight with no summary or no key points is rejected
    /// before it can reach the webhook.
    pub fn validate(&self) -> Result<(), String> {
        if self.key_points.is_empty() {
            return Err("key_points is empty".to_string());
        }
        if self.key_points.iter().any(|p| p.trim().is_empty()) {
            return Err("key_points contains an empty entry".to_string());
        }
        if self.summary.trim().is_empty() {
            return Err("summary is empty".to_string());
        }
        if self.risk_reason.trim().is_empty() {
            return Err("risk_reason is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_insight() -> Insight {
        Insight {
            key_points: vec!["point 1".to_string(), "point 2".to_string()],
            risk_level: RiskLevel::Medium,
            risk_reason: "ambiguous liability clause".to_string(),
            summary: "The contract shifts liability to the vendor.".to_string(),
        }
    }

    #[test]
    fn test_valid_insight() {
        assert!(valid_insight().validate().is_ok());
    }

    #[test]
    fn test_empty_key_points() {
        let mut insight = valid_insight();
        insight.key_points.clear();
        assert!(insight.validate().is_err());
    }

    #[test]
    fn test_blank_key_point_entry() {
        let mut insight = valid_insight();
        insight.key_points.push("   ".to_string());
        assert!(insight.validate().is_err());
    }

    #[test]
    fn test_empty_summary() {
        let mut insight = valid_insight();
        insight.summary = String::new();
        assert!(insight.validate().is_err());
    }

    #[test]
    fn test_serializes_risk_level_as_title_case() {
        let json = serde_json::to_value(valid_insight()).unwrap();
        assert_eq!(json["risk_level"], "Medium");
        assert_eq!(json["key_points"][0], "point 1");
    }
}
