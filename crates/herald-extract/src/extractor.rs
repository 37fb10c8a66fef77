//! Core extraction implementation

use crate::error::ExtractError;
use crate::format::detect_format;
use herald_domain::{Document, DocumentFormat};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Extract a document from a file on disk
///
/// Reads the file, detects its format, and extracts the text. The file name
/// becomes the document's `source_name`.
pub fn extract_file(path: impl AsRef<Path>) -> Result<Document, ExtractError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    extract_bytes(&source_name, &bytes)
}

/// Extract a document from raw bytes
///
/// # Errors
///
/// Returns an error if the format is unsupported, the PDF library cannot
/// extract text, the bytes are not valid UTF-8 for a text document, or the
/// result contains no non-whitespace text.
pub fn extract_bytes(source_name: &str, bytes: &[u8]) -> Result<Document, ExtractError> {
    let format = detect_format(source_name, bytes)?;

    debug!("Extracting '{}' as {}", source_name, format);

    let raw = match format {
        DocumentFormat::Pdf => extract_pdf(bytes)?,
        DocumentFormat::Text => extract_text(bytes)?,
    };

    let text = normalize(&raw);

    let document = Document::new(source_name, format, text);
    if document.is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    info!(
        "Extracted {} chars from '{}' ({})",
        document.text.len(),
        source_name,
        format
    );

    Ok(document)
}

/// Extract text from PDF bytes
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Decode plain-text bytes as UTF-8
fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::Encoding(e.to_string()))
}

/// Normalize extracted text
///
/// CRLF becomes LF, trailing whitespace is trimmed per line, and runs of
/// blank lines collapse to a single blank line. PDF extraction in particular
/// produces long runs of empty lines between pages.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0usize;

    for line in raw.replace("\r\n", "\n").lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    out.trim().to_string()
}
