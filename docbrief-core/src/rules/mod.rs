// Main rules module - delegates to semantic sub-modules
// This file coordinates the rule system but actual implementations are in:
// - adapter.rs: per-document threshold adaptation from line statistics
// - heading.rs: heading classification (casing, pattern, keyword policy)
// - segmenter.rs: grouping classified lines into titled sections

pub mod adapter;
pub mod heading;
pub mod segmenter;

// Re-export the rule surface
pub use adapter::RuleState;
pub use heading::{HeadingClassifier, HeadingPolicy};
pub use segmenter::SectionSegmenter;
