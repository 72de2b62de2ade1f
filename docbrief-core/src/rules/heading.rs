use crate::config::HeadingConfig;
use crate::rules::adapter::RuleState;
use anyhow::Result;
use regex::Regex;

/// The language/locale-specific half of heading detection: the keyword set
/// and the casing pattern. Kept pluggable so localization never touches
/// segmentation logic.
pub struct HeadingPolicy {
    keywords: Vec<String>,
    pattern: Regex,
}

impl HeadingPolicy {
    /// Compile a policy from config. Pattern compilation is the only
    /// fallible step in the whole classification path.
    pub fn from_config(config: &HeadingConfig) -> Result<Self> {
        let pattern = Regex::new(&config.pattern)?;
        let keywords = config
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        Ok(Self { keywords, pattern })
    }

    fn matches_pattern(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    fn matches_keyword(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k))
    }
}

/// Decides whether a single line starts a new section. Total over all
/// string input: blank lines are trivially non-headings, and no input
/// can make classification fail.
pub struct HeadingClassifier {
    policy: HeadingPolicy,
}

impl HeadingClassifier {
    pub fn new(policy: HeadingPolicy) -> Self {
        Self { policy }
    }

    pub fn is_heading(&self, line: &str, rules: &RuleState) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }

        // Casing/pattern path, only open to lines short enough to be titles
        if line.split_whitespace().count() <= rules.heading_word_limit
            && (is_all_uppercase(line) || is_title_case(line) || self.policy.matches_pattern(line))
        {
            return true;
        }

        // Keyword override, independent of length and casing
        self.policy.matches_keyword(line)
    }
}

/// True when the string contains at least one cased character and no
/// lowercase ones.
fn is_all_uppercase(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Title-case check: uppercase letters only follow uncased characters,
/// lowercase letters only follow cased ones, and at least one cased
/// character exists.
fn is_title_case(s: &str) -> bool {
    let mut prev_cased = false;
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            has_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            has_cased = true;
        } else {
            prev_cased = false;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeadingConfig;

    fn classifier() -> HeadingClassifier {
        HeadingClassifier::new(HeadingPolicy::from_config(&HeadingConfig::default()).unwrap())
    }

    fn rules_with_limit(limit: usize) -> RuleState {
        RuleState {
            heading_word_limit: limit,
            ..RuleState::default()
        }
    }

    #[test]
    fn blank_lines_never_qualify() {
        let c = classifier();
        let rules = RuleState::default();
        assert!(!c.is_heading("", &rules));
        assert!(!c.is_heading("   \t ", &rules));
    }

    #[test]
    fn all_caps_short_line_qualifies() {
        let c = classifier();
        assert!(c.is_heading("RESULTS AND DISCUSSION", &rules_with_limit(6)));
    }

    #[test]
    fn title_case_short_line_qualifies() {
        let c = classifier();
        assert!(c.is_heading("Future Work", &rules_with_limit(6)));
    }

    #[test]
    fn mixed_case_sentence_does_not_qualify() {
        let c = classifier();
        assert!(!c.is_heading("the quick brown fox", &rules_with_limit(10)));
    }

    #[test]
    fn pattern_allows_restricted_punctuation() {
        let c = classifier();
        let rules = rules_with_limit(10);
        assert!(c.is_heading("Methods: a closer look", &rules));
        assert!(c.is_heading("Costs & benefits (2024)", &rules));
    }

    #[test]
    fn pattern_rejects_stray_symbols_and_leading_digits() {
        let c = classifier();
        let rules = rules_with_limit(10);
        assert!(!c.is_heading("3 easy steps", &rules));
        assert!(!c.is_heading("Results* are preliminary", &rules));
        assert!(!c.is_heading("email me @ some address", &rules));
    }

    #[test]
    fn long_line_cannot_qualify_via_casing() {
        let c = classifier();
        let line = "A Very Long Title Case Line That Keeps Going Well Past Any Limit";
        assert!(!c.is_heading(line, &rules_with_limit(6)));
    }

    #[test]
    fn keyword_overrides_length_gate() {
        let c = classifier();
        let line = "this chapter describes the experimental setup in considerable detail";
        assert!(c.is_heading(line, &rules_with_limit(6)));
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let c = classifier();
        assert!(c.is_heading("EXECUTIVE SUMMARY of findings over many years and sites", &rules_with_limit(6)));
        assert!(c.is_heading("background", &rules_with_limit(6)));
    }

    #[test]
    fn classifier_is_total_over_odd_input() {
        let c = classifier();
        let rules = RuleState::default();
        for line in ["…", "¿Qué?", "42", "\u{0}", "ß", "ʼn", "ALL-CAPS-WITH-DASHES"] {
            // must not panic, any boolean is acceptable here
            let _ = c.is_heading(line, &rules);
        }
    }

    #[test]
    fn uppercase_helper_matches_python_semantics() {
        assert!(is_all_uppercase("INTRODUCTION"));
        assert!(is_all_uppercase("PART 2"));
        assert!(!is_all_uppercase("123"));
        assert!(!is_all_uppercase("Intro"));
    }

    #[test]
    fn title_case_helper_matches_python_semantics() {
        assert!(is_title_case("Hello World"));
        assert!(is_title_case("A Tale Of Two Cities"));
        // lowercase after an uncased apostrophe breaks title case
        assert!(!is_title_case("They're Here"));
        assert!(!is_title_case("HELLO"));
        assert!(!is_title_case("Hello world"));
        assert!(!is_title_case("123"));
    }
}
