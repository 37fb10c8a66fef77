//! Automation wire contract - the payload sent to the webhook and the
//! outcome expected back

use crate::insight::Insight;
use serde::{Deserialize, Serialize};

/// The flat JSON object POSTed to the automation webhook
///
/// All four keys are always present; the serde derive guarantees the shape.
/// `structured_data` being a typed [`Insight`] means a malformed or absent
/// insight cannot reach the webhook - dispatch is only possible after a
/// successful analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationPayload {
    /// Full extracted document text
    pub document_text: String,

    /// The user's analytical question
    pub question: String,

    /// The structured insight produced by the analysis
    pub structured_data: Insight,

    /// Where the automation should send the alert email
    pub recipient_email: String,
}

/// The response the automation webhook is expected to return
///
/// Exactly three string fields. Presence of all three is validated at the
/// dispatch boundary immediately after the call; a missing key becomes a
/// typed, recoverable error carrying the raw body, never a render-time
/// lookup fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationOutcome {
    /// The automation's final analytical answer
    pub final_answer: String,

    /// The email body the automation composed
    pub email_body: String,

    /// Delivery status reported by the automation (e.g. "sent")
    pub email_status: String,
}

impl AutomationOutcome {
    /// The keys the webhook response must contain
    pub const EXPECTED_KEYS: [&'static str; 3] =
        ["final_answer", "email_body", "email_status"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskLevel;

    #[test]
    fn test_payload_serializes_all_four_keys() {
        let payload = AutomationPayload {
            document_text: "Test".to_string(),
            question: "Test?".to_string(),
            structured_data: Insight {
                key_points: vec!["p".to_string()],
                risk_level: RiskLevel::High,
                risk_reason: "r".to_string(),
                summary: "s".to_string(),
            },
            recipient_email: "test@example.com".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("document_text"));
        assert!(obj.contains_key("question"));
        assert!(obj.contains_key("structured_data"));
        assert!(obj.contains_key("recipient_email"));
        assert_eq!(json["structured_data"]["risk_level"], "High");
    }

    #[test]
    fn test_outcome_round_trip() {
        let json = r#"{"final_answer":"A","email_body":"B","email_status":"sent"}"#;
        let outcome: AutomationOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.final_answer, "A");
        assert_eq!(outcome.email_body, "B");
        assert_eq!(outcome.email_status, "sent");
    }

    #[test]
    fn test_expected_keys() {
        assert_eq!(
            AutomationOutcome::EXPECTED_KEYS,
            ["final_answer", "email_body", "email_status"]
        );
    }
}
