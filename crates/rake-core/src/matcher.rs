//! Boundary-aware stopword matching.
//!
//! The matcher compiles every stopword into one case-insensitive alternation
//! anchored on word boundaries, `\b(?:w1|w2|...)\b`. Each stopword is escaped, so
//! entries such as `a.b` only ever match the literal token.

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::{RakeError, Stopwords};

/// Compiled stopword matcher.
///
/// Built once per stopword collection and shared read-only across extractions.
#[derive(Debug, Clone)]
pub struct StopwordMatcher {
    /// Compiled alternation, or `None` when the collection is empty.
    pattern: Option<Regex>,
}

impl StopwordMatcher {
    /// Compiles a matcher for the given stopwords.
    ///
    /// An empty collection produces a matcher that never matches.
    pub fn build(stopwords: &Stopwords) -> Result<Self, RakeError> {
        if stopwords.is_empty() {
            debug!("building stopword matcher with no stopwords");
            return Ok(Self { pattern: None });
        }

        let alternation = stopwords
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r"\b(?:{alternation})\b");

        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|source| RakeError::StopwordPattern {
                count: stopwords.len(),
                source,
            })?;

        debug!(stopwords = stopwords.len(), "built stopword matcher");
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Returns true if the matcher can never match.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Finds the byte spans of all stopword occurrences in a sentence.
    ///
    /// Spans are non-overlapping and ordered left to right.
    pub fn find_delimiter_spans(&self, sentence: &str) -> Vec<Range<usize>> {
        match &self.pattern {
            Some(pattern) => pattern.find_iter(sentence).map(|m| m.range()).collect(),
            None => Vec::new(),
        }
    }
}
