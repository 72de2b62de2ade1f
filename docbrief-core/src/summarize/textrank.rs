//! TextRank extractive summarizer
//!
//! Builds a sentence similarity graph (token overlap normalized by log
//! sentence lengths) and ranks sentences with damped power iteration.
//! Selection keeps source order so extracted summaries read naturally.

use super::split_sentences;
use anyhow::{bail, Result};
use std::collections::HashSet;

const DAMPING: f64 = 0.85;
const MAX_ITERATIONS: usize = 50;
const CONVERGENCE: f64 = 1e-4;

pub struct TextRankSummarizer;

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRankSummarizer {
    pub fn new() -> Self {
        Self
    }

    /// Return the `sentence_count` highest-ranked sentences in source order.
    /// Fails on empty input or a zero budget; the adapter absorbs both.
    pub fn summarize(&self, text: &str, sentence_count: usize) -> Result<Vec<String>> {
        if sentence_count == 0 {
            bail!("requested zero sentences");
        }

        let sentences = split_sentences(text);
        if sentences.is_empty() {
            bail!("no sentences to rank");
        }
        if sentences.len() <= sentence_count {
            return Ok(sentences);
        }

        let token_sets: Vec<HashSet<String>> = sentences
            .iter()
            .map(|s| {
                tokenize(s)
                    .into_iter()
                    .filter(|w| !is_stopword(w))
                    .collect()
            })
            .collect();

        let scores = rank(&token_sets);

        let mut ranked: Vec<usize> = (0..sentences.len()).collect();
        ranked.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut picked: Vec<usize> = ranked.into_iter().take(sentence_count).collect();
        picked.sort_unstable();

        Ok(picked.into_iter().map(|i| sentences[i].clone()).collect())
    }
}

/// Damped power iteration over the similarity graph.
fn rank(token_sets: &[HashSet<String>]) -> Vec<f64> {
    let n = token_sets.len();

    let mut weights = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let sim = similarity(&token_sets[i], &token_sets[j]);
            weights[i][j] = sim;
            weights[j][i] = sim;
        }
    }

    let out_sums: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();

    let mut scores = vec![1.0f64; n];
    for _ in 0..MAX_ITERATIONS {
        let mut next = vec![0.0f64; n];
        for (i, next_score) in next.iter_mut().enumerate() {
            let mut incoming = 0.0;
            for j in 0..n {
                if i == j || out_sums[j] == 0.0 {
                    continue;
                }
                incoming += weights[j][i] / out_sums[j] * scores[j];
            }
            *next_score = (1.0 - DAMPING) + DAMPING * incoming;
        }

        let delta: f64 = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b).abs())
            .sum();
        scores = next;
        if delta < CONVERGENCE {
            break;
        }
    }

    scores
}

/// Token overlap normalized by log sentence lengths, so long sentences
/// don't dominate purely by size.
fn similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let overlap = a.intersection(b).count() as f64;
    if overlap == 0.0 {
        return 0.0;
    }
    let denom = ((a.len() + 1) as f64).ln() + ((b.len() + 1) as f64).ln();
    if denom == 0.0 {
        return 0.0;
    }
    overlap / denom
}

/// Tokenize text into lowercase alphanumeric words
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|w| w.len() >= 2)
        .map(String::from)
        .collect()
}

/// Common English stopwords
fn is_stopword(word: &str) -> bool {
    const STOPWORDS: &[&str] = &[
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "this",
        "that", "these", "those", "it", "its", "as", "if", "then", "than", "so", "such", "no",
        "not", "only", "own", "same", "too", "very", "just", "also", "now", "here", "there",
        "when", "where", "why", "how", "all", "each", "every", "both", "few", "more", "most",
        "other", "some", "any", "into", "through", "during", "before", "after", "above", "below",
        "up", "down", "out", "off", "over", "under", "again", "further", "once", "he", "she",
        "they", "we", "you", "i", "me", "my", "your", "his", "her", "their", "our", "which", "who",
        "whom", "what", "whose",
    ];
    STOPWORDS.contains(&word)
}
