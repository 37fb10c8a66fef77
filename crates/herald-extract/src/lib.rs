//! Herald Extract
//!
//! Reduces an uploaded document to a single text string.
//!
//! # Overview
//!
//! This crate is the first stage of the pipeline: given a file path or raw
//! bytes it detects the format (PDF or plain text), extracts the text, and
//! returns a [`herald_domain::Document`]. There is no chunking and no
//! encoding negotiation beyond what the extraction library provides.
//!
//! # Architecture
//!
//! ```text
//! File/Bytes → format detection → PDF or UTF-8 extraction → normalization → Document
//! ```
//!
//! Extraction failures (corrupt file, unsupported format, empty content) are
//! typed errors the caller surfaces to the user; nothing here panics.

#![warn(missing_docs)]

mod error;
mod extractor;
mod format;

pub use error::ExtractError;
pub use extractor::{extract_bytes, extract_file};
pub use format::detect_format;
