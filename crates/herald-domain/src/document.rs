//! Document module - an uploaded file reduced to extracted text

use std::fmt;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// PDF, extracted via the PDF text extraction library
    Pdf,

    /// Plain UTF-8 text
    Text,
}

impl DocumentFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Text => "text",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A document reduced to its extracted text
///
/// Created by `herald-extract` when a file is read, carried through one
/// analysis/dispatch interaction, then discarded. The raw bytes are not
/// retained.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Where the text came from (usually a file name)
    pub source_name: String,

    /// Format the text was extracted from
    pub format: DocumentFormat,

    /// The full extracted text
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(
        source_name: impl Into<String>,
        format: DocumentFormat,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            format,
            text: text.into(),
        }
    }

    /// First `max_chars` characters of the text, on a char boundary
    ///
    /// Used for the extracted-text preview shown before analysis. Returns the
    /// whole text when it is shorter than the limit.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    /// Whether the extracted text contains any non-whitespace content
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
