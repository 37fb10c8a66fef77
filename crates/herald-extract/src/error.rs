//! Error types for document extraction

use thiserror::Error;

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension is not one of the supported formats
    #[error("Unsupported format: {0} (expected .pdf or .txt)")]
    UnsupportedFormat(String),

    /// PDF library failed to extract text
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// Text file was not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Extraction succeeded but produced no usable text
    #[error("Document contains no extractable text")]
    EmptyDocument,
}
