//! Summarization
//!
//! Maps a simplified "compression ratio" request onto the extractive
//! summarizer's native sentence budget, with graceful degradation to naive
//! truncation. The adapter never fails: every extractive-path problem is
//! absorbed and masked by the fallback.

#[cfg(feature = "textrank")]
pub mod textrank;

#[cfg(feature = "textrank")]
pub use textrank::TextRankSummarizer;

use crate::config::{PipelineConfig, SummaryConfig};
use anyhow::Result;

/// The extractive capability, selected once at startup rather than probed
/// per call. `TruncationOnly` is what a build without the `textrank`
/// feature gets; it is also injectable directly to force the fallback path
/// in tests.
pub enum SummaryCapability {
    #[cfg(feature = "textrank")]
    Extractive(TextRankSummarizer),
    TruncationOnly,
}

impl SummaryCapability {
    /// Pick the best capability this build supports.
    pub fn detect() -> Self {
        #[cfg(feature = "textrank")]
        {
            Self::Extractive(TextRankSummarizer::new())
        }
        #[cfg(not(feature = "textrank"))]
        {
            Self::TruncationOnly
        }
    }

    fn extract(&self, text: &str, sentence_count: usize) -> Result<Vec<String>> {
        match self {
            #[cfg(feature = "textrank")]
            Self::Extractive(summarizer) => summarizer.summarize(text, sentence_count),
            Self::TruncationOnly => anyhow::bail!("extractive summarizer not available"),
        }
    }
}

/// Translates length-budget requests into summaries. Persona and job are
/// only woven into the output prefix; they never alter sentence selection.
pub struct SummaryAdapter {
    persona: String,
    job: String,
    capability: SummaryCapability,
    tuning: SummaryConfig,
}

impl SummaryAdapter {
    pub fn new(
        persona: String,
        job: String,
        capability: SummaryCapability,
        tuning: SummaryConfig,
    ) -> Self {
        Self {
            persona,
            job,
            capability,
            tuning,
        }
    }

    /// Build an adapter from config with the best available capability.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.persona.clone(),
            config.job.clone(),
            SummaryCapability::detect(),
            config.summary.clone(),
        )
    }

    pub fn max_sents(&self) -> usize {
        self.tuning.max_sents
    }

    pub fn executive_max_sents(&self) -> usize {
        self.tuning.executive_max_sents
    }

    /// Summarize free text. Infallible: short texts pass through unchanged
    /// and extractive failures degrade to truncation.
    pub fn summarize(&self, text: &str, max_sents: usize) -> String {
        let text = normalize_whitespace(text);
        let word_count = text.split_whitespace().count();

        if word_count < self.tuning.min_words {
            return text;
        }

        let ratio = compression_ratio(word_count, &self.tuning);
        let sentences = split_sentences(&text);
        let target = target_sentence_count(sentences.len(), ratio);

        match self.capability.extract(&text, target) {
            Ok(picked) if !picked.is_empty() => format!(
                "For a {} working to {}, key points: {}",
                self.persona,
                self.job,
                picked.join(" ")
            ),
            _ => sentences
                .iter()
                .take(max_sents)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string(),
        }
    }
}

/// Collapse all whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Harder compression for longer texts.
pub fn compression_ratio(word_count: usize, tuning: &SummaryConfig) -> f64 {
    if word_count > tuning.long_doc_words {
        tuning.long_doc_ratio
    } else {
        tuning.short_doc_ratio
    }
}

/// Translate a compression ratio into the summarizer's native sentence
/// budget. Always requests at least one sentence, even when parsing found
/// none.
pub fn target_sentence_count(sentence_count: usize, ratio: f64) -> usize {
    if sentence_count == 0 {
        return 1;
    }
    ((sentence_count as f64 * ratio) as usize).max(1)
}

/// Split on sentence-terminal punctuation (., !, ?) followed by whitespace.
/// Terminators are kept with their sentence; a punctuation-free tail is a
/// sentence of its own.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
