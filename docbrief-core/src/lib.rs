// Docbrief Core Library
//
// Provides document processing with pluggable text-extraction backends.
// Main interface for turning PDF text into persona-targeted section summaries.

pub mod types;
pub mod extract;
pub mod rules;
pub mod summarize;
pub mod processor;
pub mod config;

// Re-export main types and functions for easy use
pub use types::*;
pub use extract::{ExtractError, TextExtractor};
pub use processor::DocumentProcessor;
pub use config::PipelineConfig;
pub use rules::{HeadingClassifier, RuleState, SectionSegmenter};
pub use summarize::{SummaryAdapter, SummaryCapability};

// Re-export backends for direct use
#[cfg(feature = "lopdf-backend")]
pub use extract::LopdfExtractor;
