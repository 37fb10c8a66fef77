//! Prompt engineering for insight extraction

/// System instruction for the extraction call
pub const SYSTEM_INSTRUCTIONS: &str = "You MUST return ONLY valid JSON. No explanations.";

/// System instruction for the repair call, whose user message is the
/// malformed output from a previous attempt
pub const REPAIR_INSTRUCTIONS: &str = "Fix and return ONLY valid JSON.";

const OUTPUT_SCHEMA: &str = r#"Return JSON in EXACTLY this format:
{
  "key_points": ["point 1", "point 2"],
  "risk_level": "Low | Medium | High",
  "risk_reason": "string",
  "summary": "string"
}"#;

/// Builds the user message for the extraction call
pub struct PromptBuilder {
    document_text: String,
    question: String,
    max_document_chars: usize,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(document_text: String, question: String) -> Self {
        Self {
            document_text,
            question,
            max_document_chars: usize::MAX,
        }
    }

    /// Truncate the document to at most `max_chars` characters
    pub fn with_max_document_chars(mut self, max_chars: usize) -> Self {
        self.max_document_chars = max_chars;
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Output schema the model must follow
        prompt.push_str(OUTPUT_SCHEMA);
        prompt.push_str("\n\n");

        // 2. The question
        prompt.push_str("User Question:\n");
        prompt.push_str(&self.question);
        prompt.push_str("\n\n");

        // 3. The document, truncated to the configured budget
        prompt.push_str("Document Text:\n");
        prompt.push_str(truncate_chars(&self.document_text, self.max_document_chars));
        prompt.push('\n');

        prompt
    }
}

/// First `max_chars` characters of `text`, on a char boundary
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
