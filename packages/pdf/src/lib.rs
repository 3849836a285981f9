#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF text extraction for uploaded start lists.
//!
//! Thin wrapper around pure-Rust text extraction ([`pdf_extract`]). The
//! parser downstream only depends on line order, so the flattened text
//! (pages concatenated with newlines) is all it needs — no layout or
//! table reconstruction happens here.
//!
//! Extraction failure fails the whole upload: a partially extracted
//! document would produce silently incomplete search results.

/// Errors specific to PDF extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),
}

/// Extracts the text layer from an in-memory PDF.
///
/// # Errors
///
/// Returns [`PdfError::Extraction`] if the bytes are not a readable PDF
/// or its text layer cannot be decoded.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

    log::debug!(
        "Extracted {} characters of text from {} byte PDF",
        text.len(),
        bytes.len()
    );

    Ok(text)
}
