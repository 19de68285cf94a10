use crate::error::{RaceError, Result};
use regex::{Regex, RegexBuilder};

/// Counts occurrences of the target keyword in page content.
///
/// The pattern is "optional whitespace + keyword + optional whitespace",
/// case-insensitive. This is a rough word-boundary proxy: a keyword
/// embedded in a longer word still counts when flanked by whitespace on
/// either side. The heuristic was tuned with exactly this behavior, so
/// it is kept rather than swapped for a strict `\b` match.
///
/// Pure and deterministic; cloning shares the compiled pattern.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    keyword: String,
    pattern: Regex,
}

impl KeywordScorer {
    pub fn new(keyword: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!(r"\s?{}\s?", regex::escape(keyword)))
            .case_insensitive(true)
            .build()
            .map_err(|e| RaceError::ScorerError(e.to_string()))?;

        Ok(Self {
            keyword: keyword.to_string(),
            pattern,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Number of non-overlapping keyword matches in `content`.
    pub fn matches(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_occurrences() {
        let scorer = KeywordScorer::new("peace").unwrap();
        assert_eq!(scorer.matches("peace in our time, world peace"), 2);
    }

    #[test]
    fn test_case_insensitive() {
        let scorer = KeywordScorer::new("Peace").unwrap();
        assert_eq!(scorer.matches("PEACE peace Peace"), 3);
    }

    #[test]
    fn test_zero_when_absent() {
        let scorer = KeywordScorer::new("peace").unwrap();
        assert_eq!(scorer.matches("war and more war"), 0);
    }

    #[test]
    fn test_deterministic() {
        let scorer = KeywordScorer::new("peace").unwrap();
        let content = "peace peace peace";
        assert_eq!(scorer.matches(content), scorer.matches(content));
    }

    #[test]
    fn test_escapes_regex_metacharacters() {
        let scorer = KeywordScorer::new("C++ (language)").unwrap();
        assert_eq!(scorer.matches("about C++ (language) here"), 1);
        assert_eq!(scorer.matches("about C (language) here"), 0);
    }

    #[test]
    fn test_multiline_content() {
        let scorer = KeywordScorer::new("peace").unwrap();
        assert_eq!(scorer.matches("peace\npeace\npeace"), 3);
    }
}
