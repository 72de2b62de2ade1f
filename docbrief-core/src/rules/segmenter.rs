use crate::config::SegmentationConfig;
use crate::rules::adapter::RuleState;
use crate::rules::heading::HeadingClassifier;
use crate::types::Section;

/// Groups an ordered line stream into titled sections.
///
/// A heading only closes the current section once enough body lines have
/// accumulated (the guard); headings inside short runs are treated as body
/// text, which damps classifier false positives. A heading seen before any
/// body text simply retitles the pending section.
pub struct SectionSegmenter<'a> {
    classifier: &'a HeadingClassifier,
    guard_lines: usize,
    default_title: String,
}

impl<'a> SectionSegmenter<'a> {
    pub fn new(classifier: &'a HeadingClassifier, config: &SegmentationConfig) -> Self {
        Self {
            classifier,
            guard_lines: config.guard_lines,
            default_title: config.default_title.clone(),
        }
    }

    pub fn segment(&self, lines: &[String], rules: &RuleState) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();
        let mut current_title = self.default_title.clone();

        for line in lines {
            if self.classifier.is_heading(line, rules) {
                if buffer.len() > self.guard_lines {
                    let joined = buffer.join(" ").trim().to_string();
                    if !joined.is_empty() {
                        sections.push(Section {
                            title: current_title,
                            content: joined,
                        });
                    }
                    buffer.clear();
                    current_title = line.clone();
                    continue;
                }
                if buffer.is_empty() {
                    // nothing buffered to mis-split, safe to retitle
                    current_title = line.clone();
                    continue;
                }
            }
            buffer.push(line);
        }

        if !buffer.is_empty() {
            sections.push(Section {
                title: current_title,
                content: buffer.join(" "),
            });
        }

        sections
    }
}
