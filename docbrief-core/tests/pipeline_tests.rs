//! Pipeline boundary tests.
//!
//! These tests drive the full pipeline through the extractor injection
//! seam with in-memory stub backends and assert the output contract:
//!
//! - Segmentation boundaries (titles, guard behavior, line conservation)
//! - Summarization behavior per section (identity and truncation paths)
//! - Failure propagation for broken extraction backends
//!
//! No real PDF is required to run these tests.

use docbrief_core::config::PipelineConfig;
use docbrief_core::extract::{ExtractError, TextExtractor};
use docbrief_core::processor::DocumentProcessor;

// ============================================================================
// Stub extractors
// ============================================================================

/// Serves canned page texts, standing in for a working PDF backend.
struct StaticExtractor {
    pages: Vec<String>,
}

impl StaticExtractor {
    fn new(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl TextExtractor for StaticExtractor {
    fn extract_pages(&self, _bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        Ok(self.pages.clone())
    }

    fn name(&self) -> &str {
        "static-stub"
    }
}

/// Always fails, standing in for a corrupt document.
struct BrokenExtractor;

impl TextExtractor for BrokenExtractor {
    fn extract_pages(&self, _bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        Err(ExtractError::Load("simulated corrupt document".to_string()))
    }

    fn name(&self) -> &str {
        "broken-stub"
    }
}

fn processor_with_pages(pages: &[&str]) -> DocumentProcessor {
    DocumentProcessor::new_with_dependencies(
        Box::new(StaticExtractor::new(pages)),
        PipelineConfig::default(),
    )
    .expect("default config must build a processor")
}

// ============================================================================
// End-to-end segmentation scenarios
// ============================================================================

mod segmentation {
    use super::*;

    #[test]
    fn two_heading_document_splits_into_titled_sections() {
        // Nine ~8-word body lines push the buffer past the guard, so both
        // all-caps headings take effect.
        let body: Vec<String> = (0..9)
            .map(|i| format!("body line {} carries about eight plain words", i))
            .collect();
        let page = format!("INTRODUCTION\n{}\nCONCLUSION\nclosing line", body.join("\n"));

        let processor = processor_with_pages(&[page.as_str()]);
        let result = processor.process_bytes(&[]).unwrap();

        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.sections[0].section_title, "INTRODUCTION");
        assert_eq!(result.sections[1].section_title, "CONCLUSION");
        // The closing section is far below the summarization threshold, so
        // its summary is the content itself.
        assert_eq!(result.sections[1].summary, "closing line");
    }

    #[test]
    fn headingless_block_yields_single_general_section() {
        // 40 words, no heading-shaped lines anywhere
        let words: Vec<String> = (0..40).map(|i| format!("token{}", i)).collect();
        let page = words.join(" ");

        let processor = processor_with_pages(&[page.as_str()]);
        let result = processor.process_bytes(&[]).unwrap();

        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].section_title, "General");
        // Below the 60-word threshold the summary is the input unchanged
        assert_eq!(result.sections[0].summary, words.join(" "));
    }

    #[test]
    fn empty_document_yields_no_sections() {
        let processor = processor_with_pages(&[]);
        let result = processor.process_bytes(&[]).unwrap();
        assert!(result.sections.is_empty());
    }

    #[test]
    fn sections_preserve_source_line_order_across_pages() {
        let body_a: Vec<String> = (0..10)
            .map(|i| format!("first part text line {} with filler words", i))
            .collect();
        let body_b: Vec<String> = (0..3)
            .map(|i| format!("second part text line {} with filler words", i))
            .collect();
        let page1 = format!("OVERVIEW\n{}", body_a.join("\n"));
        let page2 = format!("CONCLUSION\n{}", body_b.join("\n"));

        let processor = processor_with_pages(&[page1.as_str(), page2.as_str()]);
        let result = processor.process_bytes(&[]).unwrap();

        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.sections[0].section_title, "OVERVIEW");
        assert_eq!(result.sections[1].section_title, "CONCLUSION");
        assert!(result.sections[0].summary.contains("first part"));
        assert!(result.sections[1].summary.contains("second part"));
    }
}

// ============================================================================
// Result contract
// ============================================================================

mod result_contract {
    use super::*;

    #[test]
    fn result_serializes_with_contract_field_names() {
        let processor = processor_with_pages(&["just one modest line of text"]);
        let result = processor.process_bytes(&[]).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["sections"].is_array());
        assert!(json["processing_time"].is_number());
        assert!(json["sections"][0]["section_title"].is_string());
        assert!(json["sections"][0]["summary"].is_string());
    }

    #[test]
    fn processing_time_is_non_negative_and_three_decimal() {
        let processor = processor_with_pages(&["a line of text"]);
        let result = processor.process_bytes(&[]).unwrap();

        assert!(result.processing_time >= 0.0);
        let scaled = result.processing_time * 1000.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "processing_time {} not rounded to milliseconds",
            result.processing_time
        );
    }

    #[test]
    fn executive_summary_covers_all_documents() {
        let processor = processor_with_pages(&["alpha beta gamma"]);
        let first = processor.process_bytes(&[]).unwrap();
        let second = processor.process_bytes(&[]).unwrap();

        let executive = processor.executive_summary(&[first, second]);
        // Two tiny documents stay below the summarization threshold, so the
        // executive summary is their joined summaries verbatim.
        assert_eq!(executive, "alpha beta gamma alpha beta gamma");
    }
}

// ============================================================================
// Failure propagation
// ============================================================================

mod failures {
    use super::*;

    #[test]
    fn extraction_failure_propagates_with_document_context() {
        let processor = DocumentProcessor::new_with_dependencies(
            Box::new(BrokenExtractor),
            PipelineConfig::default(),
        )
        .unwrap();

        let err = processor.process_bytes(&[]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(
            message.contains("simulated corrupt document"),
            "error should carry the backend failure: {}",
            message
        );
    }

    #[test]
    fn one_failing_document_does_not_poison_the_processor() {
        let processor = DocumentProcessor::new_with_dependencies(
            Box::new(BrokenExtractor),
            PipelineConfig::default(),
        )
        .unwrap();
        assert!(processor.process_bytes(&[]).is_err());

        // A healthy processor built from the same config keeps working —
        // nothing document-scoped leaks across invocations.
        let healthy = processor_with_pages(&["still working fine"]);
        let result = healthy.process_bytes(&[]).unwrap();
        assert_eq!(result.sections.len(), 1);
    }

    #[test]
    fn bad_heading_pattern_fails_at_construction_not_classification() {
        let mut config = PipelineConfig::default();
        config.heading.pattern = "([unclosed".to_string();

        let result = DocumentProcessor::new_with_dependencies(
            Box::new(StaticExtractor::new(&["text"])),
            config,
        );
        assert!(result.is_err());
    }
}
