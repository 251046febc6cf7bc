//! Candidate phrase segmentation.
//!
//! Each sentence is cut at every stopword occurrence. The pieces between cuts,
//! trimmed and lowercased, are the candidate phrases.

use tracing::trace;

use crate::StopwordMatcher;

/// Cuts sentences into candidate phrases at stopword boundaries.
///
/// Phrases are returned in input order. Repeated phrases are kept as repeated
/// entries; pieces that are empty after trimming are dropped.
pub fn segment_phrases<'a, I>(sentences: I, matcher: &StopwordMatcher) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut phrases = Vec::new();

    for sentence in sentences {
        let before = phrases.len();
        let mut start = 0;
        for span in matcher.find_delimiter_spans(sentence) {
            push_phrase(&mut phrases, &sentence[start..span.start]);
            start = span.end;
        }
        push_phrase(&mut phrases, &sentence[start..]);
        trace!(sentence, phrases = phrases.len() - before, "segmented sentence");
    }

    phrases
}

/// Normalizes a sentence piece and keeps it if anything remains.
fn push_phrase(phrases: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        phrases.push(trimmed.to_lowercase());
    }
}
