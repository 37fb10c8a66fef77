//! Immediate response-shape validation
//!
//! The webhook's response shape is validated right after the call; a missing
//! key becomes a typed error here instead of a lookup fault at render time.

use herald_domain::AutomationOutcome;
use serde_json::Value;

/// Build an [`AutomationOutcome`] from a parsed webhook response
///
/// Returns the list of expected keys that are absent or not strings when the
/// shape does not match.
pub fn outcome_from_value(value: &Value) -> Result<AutomationOutcome, Vec<String>> {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            return Err(AutomationOutcome::EXPECTED_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect())
        }
    };

    let mut missing = Vec::new();

    let final_answer = string_field(obj, "final_answer", &mut missing);
    let email_body = string_field(obj, "email_body", &mut missing);
    let email_status = string_field(obj, "email_status", &mut missing);

    if missing.is_empty() {
        Ok(AutomationOutcome {
            final_answer,
            email_body,
            email_status,
        })
    } else {
        Err(missing)
    }
}

fn string_field(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    missing: &mut Vec<String>,
) -> String {
    match obj.get(key).and_then(|v| v.as_str()) {
        Some(s) => s.to_string(),
        None => {
            missing.push(key.to_string());
            String::new()
        }
    }
}
