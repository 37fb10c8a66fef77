//! Document format detection

use crate::error::ExtractError;
use herald_domain::DocumentFormat;
use std::path::Path;

/// Magic bytes at the start of every PDF file
const PDF_MAGIC: &[u8] = b"%PDF";

/// Detect the document format from a file name and its leading bytes
///
/// The extension decides, but the `%PDF` magic overrides it: a PDF saved
/// with a `.txt` extension is still extracted as PDF. An unknown extension
/// without the magic is an error rather than a guess.
pub fn detect_format(source_name: &str, bytes: &[u8]) -> Result<DocumentFormat, ExtractError> {
    if bytes.starts_with(PDF_MAGIC) {
        return Ok(DocumentFormat::Pdf);
    }

    match Path::new(source_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("pdf") => Ok(DocumentFormat::Pdf),
        Some("txt") | Some("text") | Some("md") => Ok(DocumentFormat::Text),
        Some(other) => Err(ExtractError::UnsupportedFormat(format!(".{}", other))),
        None => Err(ExtractError::UnsupportedFormat(source_name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert!(matches!(
            detect_format("report.pdf", b"garbage"),
            Ok(DocumentFormat::Pdf)
        ));
        assert!(matches!(
            detect_format("notes.txt", b"hello"),
            Ok(DocumentFormat::Text)
        ));
        assert!(matches!(
            detect_format("NOTES.TXT", b"hello"),
            Ok(DocumentFormat::Text)
        ));
    }

    #[test]
    fn test_magic_overrides_extension() {
        assert!(matches!(
            detect_format("mislabeled.txt", b"%PDF-1.7 rest"),
            Ok(DocumentFormat::Pdf)
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = detect_format("image.png", b"\x89PNG").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_no_extension() {
        let err = detect_format("README", b"hello").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }
}
