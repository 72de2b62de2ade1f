use crate::config::PipelineConfig;
use crate::extract::TextExtractor;
use crate::rules::{HeadingClassifier, HeadingPolicy, RuleState, SectionSegmenter};
use crate::summarize::SummaryAdapter;
use crate::types::*;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        println!("⏱️  {}: {:.0}ms", step_name, elapsed.as_millis());

        result
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        println!("\n📊 Performance Summary:");
        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &self.timings {
            let percentage = (duration.as_secs_f64() / total.as_secs_f64()) * 100.0;
            println!(
                "   {:.<35} {:.0}ms ({:.1}%)",
                step,
                duration.as_millis(),
                percentage
            );
        }
        println!("   {:.<35} {:.0}ms", "Total", total.as_millis());
    }
}

pub struct DocumentProcessor {
    extractor: Box<dyn TextExtractor>,
    classifier: HeadingClassifier,
    summarizer: SummaryAdapter,
    config: PipelineConfig,
}

impl DocumentProcessor {
    /// Create DocumentProcessor with full dependency injection
    pub fn new_with_dependencies(
        extractor: Box<dyn TextExtractor>,
        config: PipelineConfig,
    ) -> Result<Self> {
        let policy = HeadingPolicy::from_config(&config.heading)
            .context("invalid heading pattern in config")?;
        let summarizer = SummaryAdapter::from_config(&config);

        Ok(Self {
            extractor,
            classifier: HeadingClassifier::new(policy),
            summarizer,
            config,
        })
    }

    /// Convenience constructor for CLI usage with the lopdf backend
    #[cfg(feature = "lopdf-backend")]
    pub fn new_cli(config: PipelineConfig) -> Result<Self> {
        let extractor = Box::new(crate::extract::LopdfExtractor::new());
        Self::new_with_dependencies(extractor, config)
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    pub fn summarizer(&self) -> &SummaryAdapter {
        &self.summarizer
    }

    /// Process a document from a file path.
    /// Extraction failures propagate to the caller naming the document;
    /// batch callers are expected to catch and continue.
    pub fn process_file(&self, input_path: &str) -> Result<DocumentResult> {
        println!("📄 Processing document: {}", input_path);
        let start_time = Instant::now();

        let pages = self
            .extractor
            .extract_file(Path::new(input_path))
            .with_context(|| format!("failed to extract text from {}", input_path))?;

        let mut result = self.process_pages(&pages);
        result.processing_time = round_seconds(start_time.elapsed().as_secs_f64());

        println!(
            "⏱️  Total processing time: {:.3}s ({} sections)",
            result.processing_time,
            result.sections.len()
        );
        Ok(result)
    }

    /// Process a document from raw bytes (e.g. uploads held in memory).
    pub fn process_bytes(&self, bytes: &[u8]) -> Result<DocumentResult> {
        let start_time = Instant::now();

        let pages = self
            .extractor
            .extract_pages(bytes)
            .context("failed to extract text from document bytes")?;

        let mut result = self.process_pages(&pages);
        result.processing_time = round_seconds(start_time.elapsed().as_secs_f64());
        Ok(result)
    }

    /// Process a document with per-stage profiling
    pub fn process_file_with_profiling(
        &self,
        input_path: &str,
        enable_profiling: bool,
    ) -> Result<DocumentResult> {
        let mut profiler = StepProfiler::new(enable_profiling);
        println!("📄 Processing document: {}", input_path);
        let start_time = Instant::now();

        let pages = profiler.time_step("1. Text Extraction", || {
            self.extractor
                .extract_file(Path::new(input_path))
                .with_context(|| format!("failed to extract text from {}", input_path))
        })?;

        let extracted = profiler.time_step("2. Page Flattening", || flatten_pages(&pages));

        let rules = profiler.time_step("3. Rule Adaptation", || {
            let mut rules = RuleState::default();
            rules.adapt(&extracted.lines);
            rules
        });

        let sections = profiler.time_step("4. Segmentation", || {
            let segmenter = SectionSegmenter::new(&self.classifier, &self.config.segmentation);
            segmenter.segment(&extracted.lines, &rules)
        });

        let section_results = profiler.time_step("5. Summarization", || {
            self.summarize_sections(&sections)
        });

        profiler.print_summary();

        let processing_time = round_seconds(start_time.elapsed().as_secs_f64());
        println!(
            "⏱️  Total processing time: {:.3}s ({} sections)",
            processing_time,
            section_results.len()
        );

        Ok(DocumentResult {
            sections: section_results,
            processing_time,
        })
    }

    /// Core pipeline over already-extracted page texts. Past the extraction
    /// boundary nothing can fail: rules, segmentation and summarization are
    /// all total.
    pub fn process_pages(&self, pages: &[String]) -> DocumentResult {
        let start_time = Instant::now();
        let extracted = flatten_pages(pages);

        // Fresh per-document state, adapted once, read-only afterwards
        let mut rules = RuleState::default();
        rules.adapt(&extracted.lines);

        let segmenter = SectionSegmenter::new(&self.classifier, &self.config.segmentation);
        let sections = segmenter.segment(&extracted.lines, &rules);

        DocumentResult {
            sections: self.summarize_sections(&sections),
            processing_time: round_seconds(start_time.elapsed().as_secs_f64()),
        }
    }

    fn summarize_sections(&self, sections: &[Section]) -> Vec<SectionResult> {
        sections
            .iter()
            .map(|section| SectionResult {
                section_title: section.title.clone(),
                summary: self
                    .summarizer
                    .summarize(&section.content, self.summarizer.max_sents()),
            })
            .collect()
    }

    /// Whole-batch executive summary: condenses every section summary of
    /// every processed document into a handful of sentences.
    pub fn executive_summary(&self, results: &[DocumentResult]) -> String {
        let combined = results
            .iter()
            .flat_map(|result| result.sections.iter())
            .map(|section| section.summary.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        self.summarizer
            .summarize(&combined, self.summarizer.executive_max_sents())
    }
}

/// Three-decimal seconds, the precision the result contract promises.
fn round_seconds(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_round_to_three_decimals() {
        assert_eq!(round_seconds(1.23456), 1.235);
        assert_eq!(round_seconds(0.0004), 0.0);
        assert_eq!(round_seconds(2.0), 2.0);
    }
}
