use serde::{Deserialize, Serialize};

/// Bounds for the adapted heading word limit. These are invariants of the
/// rule engine, not tuning knobs.
const WORD_LIMIT_MIN: usize = 6;
const WORD_LIMIT_MAX: usize = 15;

/// Fraction of the average line length a heading may occupy.
const WORD_LIMIT_SCALE: f64 = 0.9;

/// Guards against division by zero when every line is empty of words.
const EPSILON: f64 = 1e-5;

/// Per-document rule thresholds, recomputed once from the full line set
/// before classification runs and read-only afterwards. Owned by a single
/// pipeline invocation; never shared across documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleState {
    /// Maximum token count for a line to qualify as a heading via the
    /// casing/pattern path. Always within [6, 15].
    pub heading_word_limit: usize,
    /// Reserved for gap-based splitting; computed per document but not
    /// consulted by the segmenter. Always >= 1.5 and finite.
    pub semantic_gap_threshold: f64,
}

impl Default for RuleState {
    fn default() -> Self {
        Self {
            heading_word_limit: 12,
            semantic_gap_threshold: 1.8,
        }
    }
}

impl RuleState {
    /// Recompute thresholds from the document's line statistics.
    ///
    /// An empty line set leaves the state untouched. Deterministic for
    /// identical input.
    pub fn adapt(&mut self, lines: &[String]) {
        let word_counts: Vec<f64> = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split_whitespace().count() as f64)
            .collect();

        if word_counts.is_empty() {
            return;
        }

        let avg = word_counts.iter().sum::<f64>() / word_counts.len() as f64;
        let variance = word_counts
            .iter()
            .map(|count| (count - avg).powi(2))
            .sum::<f64>()
            / word_counts.len() as f64;
        let std = variance.sqrt();

        self.heading_word_limit = ((WORD_LIMIT_SCALE * avg).round() as i64)
            .clamp(WORD_LIMIT_MIN as i64, WORD_LIMIT_MAX as i64)
            as usize;
        self.semantic_gap_threshold = 1.5 + std / (avg + EPSILON);
    }
}
