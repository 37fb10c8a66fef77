//! Parse model output into a validated insight

use crate::error::InsightError;
use herald_domain::{Insight, RiskLevel};
use serde_json::Value;

/// Parse a model response into a validated [`Insight`]
///
/// Tolerates markdown code fences and surrounding prose: the parsed region
/// runs from the first `{` to the last `}` after fence lines are dropped.
pub fn parse_insight(response: &str) -> Result<Insight, InsightError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)?;

    let insight = parse_insight_json(&json)?;

    insight
        .validate()
        .map_err(InsightError::InvalidFormat)?;

    Ok(insight)
}

/// Extract the JSON object from a model response
///
/// Models sometimes wrap JSON in markdown code blocks or lead with prose
/// despite the JSON-only instruction.
fn extract_json(response: &str) -> Result<String, InsightError> {
    if response.trim().is_empty() {
        return Err(InsightError::EmptyResponse);
    }

    // Drop fence lines (```json ... ```), keep everything else
    let cleaned: String = response
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n");

    let start = cleaned.find('{');
    let end = cleaned.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(cleaned[start..=end].to_string()),
        _ => Err(InsightError::NoJsonFound),
    }
}

/// Parse the insight fields out of a JSON value
fn parse_insight_json(json: &Value) -> Result<Insight, InsightError> {
    let obj = json
        .as_object()
        .ok_or_else(|| InsightError::InvalidFormat("Expected a JSON object".to_string()))?;

    let key_points = obj
        .get("key_points")
        .and_then(|v| v.as_array())
        .ok_or_else(|| missing("key_points"))?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(|| missing("key_points")))
        .collect::<Result<Vec<String>, InsightError>>()?;

    let risk_level = obj
        .get("risk_level")
        .and_then(|v| v.as_str())
        .and_then(RiskLevel::parse)
        .ok_or_else(|| missing("risk_level"))?;

    let risk_reason = obj
        .get("risk_reason")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing("risk_reason"))?
        .to_string();

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing("summary"))?
        .to_string();

    Ok(Insight {
        key_points,
        risk_level,
        risk_reason,
        summary,
    })
}

fn missing(field: &str) -> InsightError {
    InsightError::InvalidFormat(format!("Missing or invalid '{}'", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "key_points": ["clause 4 shifts liability", "term is 24 months"],
        "risk_level": "High",
        "risk_reason": "uncapped indemnity",
        "summary": "The customer carries uncapped liability."
    }"#;

    #[test]
    fn test_parse_valid_json() {
        let insight = parse_insight(VALID).unwrap();
        assert_eq!(insight.key_points.len(), 2);
        assert_eq!(insight.risk_level, RiskLevel::High);
        assert_eq!(insight.summary, "The customer carries uncapped liability.");
    }

    #[test]
    fn test_parse_with_markdown_fences() {
        let response = format!("```json\n{}\n```", VALID);
        let insight = parse_insight(&response).unwrap();
        assert_eq!(insight.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_parse_with_surrounding_prose() {
        let response = format!("Here is the analysis you asked for:\n{}\nHope that helps!", VALID);
        let insight = parse_insight(&response).unwrap();
        assert_eq!(insight.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_parse_lowercase_risk_level() {
        let response = VALID.replace("\"High\"", "\"high\"");
        let insight = parse_insight(&response).unwrap();
        assert_eq!(insight.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(matches!(parse_insight(""), Err(InsightError::EmptyResponse)));
        assert!(matches!(parse_insight("  \n "), Err(InsightError::EmptyResponse)));
    }

    #[test]
    fn test_parse_no_json() {
        let result = parse_insight("I could not analyze the document.");
        assert!(matches!(result, Err(InsightError::NoJsonFound)));
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_insight(r#"{"key_points": ["unterminated"#);
        assert!(matches!(result, Err(InsightError::NoJsonFound)));

        let result = parse_insight(r#"{"key_points": [}"#);
        assert!(matches!(result, Err(InsightError::JsonParse(_))));
    }

    #[test]
    fn test_parse_missing_field() {
        let response = r#"{
            "key_points": ["a point"],
            "risk_level": "Low",
            "summary": "s"
        }"#;
        match parse_insight(response) {
            Err(InsightError::InvalidFormat(msg)) => assert!(msg.contains("risk_reason")),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_risk_level() {
        let response = VALID.replace("\"High\"", "\"Catastrophic\"");
        match parse_insight(&response) {
            Err(InsightError::InvalidFormat(msg)) => assert!(msg.contains("risk_level")),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_mistyped_key_points() {
        let response = r#"{
            "key_points": "not an array",
            "risk_level": "Low",
            "risk_reason": "r",
            "summary": "s"
        }"#;
        assert!(matches!(
            parse_insight(response),
            Err(InsightError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_content() {
        let response = r#"{
            "key_points": [],
            "risk_level": "Low",
            "risk_reason": "r",
            "summary": "s"
        }"#;
        assert!(matches!(
            parse_insight(response),
            Err(InsightError::InvalidFormat(_))
        ));
    }
}
