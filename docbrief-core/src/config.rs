use anyhow::Result;
use serde::{Deserialize, Serialize};

// Default value functions for serde
fn default_persona() -> String {
    "General User".to_string()
}

fn default_job() -> String {
    "Document analysis".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Persona string woven into extractive summary prefixes
    #[serde(default = "default_persona")]
    pub persona: String,
    /// Job-to-be-done string woven into extractive summary prefixes
    #[serde(default = "default_job")]
    pub job: String,
    #[serde(default)]
    pub heading: HeadingConfig,
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingConfig {
    /// Case-insensitive keywords that mark a line as a heading regardless
    /// of its length or casing
    #[serde(default = "default_heading_keywords")]
    pub keywords: Vec<String>,
    /// Anchored pattern a short line may match to qualify as a heading:
    /// leading capital, then letters/digits/whitespace/restricted punctuation
    #[serde(default = "default_heading_pattern")]
    pub pattern: String,
}

fn default_heading_keywords() -> Vec<String> {
    vec![
        "introduction".to_string(),
        "overview".to_string(),
        "summary".to_string(),
        "conclusion".to_string(),
        "chapter".to_string(),
        "section".to_string(),
        "objective".to_string(),
        "purpose".to_string(),
        "background".to_string(),
        "recipe".to_string(),
    ]
}

fn default_heading_pattern() -> String {
    r#"^[A-Z][A-Za-z0-9\s,:;’'"&\-()]+$"#.to_string()
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            keywords: default_heading_keywords(),
            pattern: default_heading_pattern(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// A heading only flushes the pending buffer once it holds more than
    /// this many lines. Damps false positives from the classifier.
    #[serde(default = "default_guard_lines")]
    pub guard_lines: usize,
    /// Title used before any heading has been detected
    #[serde(default = "default_section_title")]
    pub default_title: String,
}

fn default_guard_lines() -> usize {
    8
}

fn default_section_title() -> String {
    "General".to_string()
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            guard_lines: default_guard_lines(),
            default_title: default_section_title(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Texts below this word count are returned unchanged
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    /// Word count above which the harder compression ratio applies
    #[serde(default = "default_long_doc_words")]
    pub long_doc_words: usize,
    /// Compression ratio for long texts
    #[serde(default = "default_long_doc_ratio")]
    pub long_doc_ratio: f64,
    /// Compression ratio for everything else
    #[serde(default = "default_short_doc_ratio")]
    pub short_doc_ratio: f64,
    /// Sentences kept by the truncation fallback for section summaries
    #[serde(default = "default_max_sents")]
    pub max_sents: usize,
    /// Sentences kept when summarizing a whole batch into an executive summary
    #[serde(default = "default_executive_max_sents")]
    pub executive_max_sents: usize,
}

fn default_min_words() -> usize {
    60
}

fn default_long_doc_words() -> usize {
    800
}

fn default_long_doc_ratio() -> f64 {
    0.08
}

fn default_short_doc_ratio() -> f64 {
    0.15
}

fn default_max_sents() -> usize {
    3
}

fn default_executive_max_sents() -> usize {
    6
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            long_doc_words: default_long_doc_words(),
            long_doc_ratio: default_long_doc_ratio(),
            short_doc_ratio: default_short_doc_ratio(),
            max_sents: default_max_sents(),
            executive_max_sents: default_executive_max_sents(),
        }
    }
}

impl PipelineConfig {
    /// Load config from file path (functional approach)
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|_| {
                eprintln!("⚠️  Failed to load config from {}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            persona: default_persona(),
            job: default_job(),
            heading: HeadingConfig::default(),
            segmentation: SegmentationConfig::default(),
            summary: SummaryConfig::default(),
        }
    }
}
