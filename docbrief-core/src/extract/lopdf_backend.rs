//! lopdf backend
//!
//! Pure-Rust PDF text extraction. Loads the document once and pulls text
//! page by page so downstream stages see pages in document order.

use super::traits::{ExtractError, TextExtractor};
use lopdf::Document;

pub struct LopdfExtractor;

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for LopdfExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Load(e.to_string()))?;

        let mut pages = Vec::new();
        // get_pages() is keyed by 1-indexed page number, in document order
        for (page_num, _) in doc.get_pages() {
            let text = doc
                .extract_text(&[page_num])
                .map_err(|e| ExtractError::Page {
                    page: page_num,
                    reason: e.to_string(),
                })?;
            pages.push(text);
        }

        Ok(pages)
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}
