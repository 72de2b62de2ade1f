// Extractor abstraction for document processing
//
// This module defines the boundary between text extraction (PDF -> page
// texts) and semantic processing (page texts -> sections -> summaries).
// The extractor abstraction allows different parsing backends while
// maintaining a consistent interface.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to load document: {0}")]
    Load(String),

    #[error("failed to extract text from page {page}: {reason}")]
    Page { page: u32, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// TextExtractor trait - converts documents to ordered page texts
///
/// This is the key abstraction boundary in docbrief. Extractors handle
/// document format parsing and raw text recovery; everything downstream
/// works on plain strings and never touches document bytes.
///
/// Page texts may contain internal line breaks; the pipeline flattens and
/// trims them itself.
pub trait TextExtractor {
    /// Extract the ordered sequence of page texts from raw document bytes.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError>;

    /// Convenience method: extract from a file path.
    fn extract_file(&self, input: &Path) -> Result<Vec<String>, ExtractError> {
        let bytes = std::fs::read(input)?;
        self.extract_pages(&bytes)
    }

    /// Get extractor name for debugging/logging
    fn name(&self) -> &str;

    /// Check if the extractor supports the given file type
    fn supports_file_type(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false)
    }
}
