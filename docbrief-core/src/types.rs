use serde::{Deserialize, Serialize};

/// A contiguous run of body lines plus its inferred title.
/// Produced by the segmenter, consumed by the summarization stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub title: String,
    /// Whitespace-joined text of all non-heading lines since the
    /// previous heading.
    pub content: String,
}

/// One summarized section. Field names are the output contract —
/// downstream consumers (report/UI/export layers) read exactly these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionResult {
    pub section_title: String,
    pub summary: String,
}

/// The pipeline's sole output artifact per document. Immutable once
/// returned; `processing_time` is wall-clock seconds, 3-decimal precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    pub sections: Vec<SectionResult>,
    pub processing_time: f64,
}

/// Flattened view of a document's extracted pages: ordered trimmed lines
/// for segmentation, plus the raw concatenated text for whole-document
/// operations (e.g. an executive summary).
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub lines: Vec<String>,
    pub full_text: String,
}

/// Flatten per-page text into an ordered line list, trimming each line
/// and dropping blanks. Page order and in-page line order are preserved.
pub fn flatten_pages(pages: &[String]) -> ExtractedText {
    let mut lines = Vec::new();
    let mut full_text = String::new();

    for page_text in pages {
        for line in page_text.lines() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        full_text.push_str(page_text);
        full_text.push('\n');
    }

    ExtractedText { lines, full_text }
}
