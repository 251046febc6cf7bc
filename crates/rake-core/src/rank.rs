//! Phrase ranking.
//!
//! A phrase scores the sum of its word scores. Each distinct phrase is listed
//! once, no matter how often it occurred, and the list is sorted by score
//! descending. Phrases with equal scores keep the order of their first
//! occurrence in the input.

use std::collections::HashSet;

use serde::Serialize;

use crate::{WordScores, split_words};

/// A key phrase with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPhrase {
    /// The phrase text, lowercased.
    pub phrase: String,
    /// Sum of the phrase's word scores (higher = more relevant).
    pub score: f64,
}

impl ScoredPhrase {
    /// Creates a new scored phrase.
    pub fn new(phrase: impl Into<String>, score: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }
}

/// Computes the score of one phrase from word statistics.
///
/// Phrases without words score `0.0`.
pub fn phrase_score(phrase: &str, scores: &WordScores) -> f64 {
    split_words(phrase)
        .into_iter()
        .fold(0.0, |total, word| total + scores.score(word))
}

/// Ranks distinct phrases by score, highest first.
pub fn rank_phrases<S: AsRef<str>>(phrases: &[S], scores: &WordScores) -> Vec<ScoredPhrase> {
    let mut seen = HashSet::new();
    let mut ranked: Vec<ScoredPhrase> = phrases
        .iter()
        .map(|phrase| phrase.as_ref())
        .filter(|phrase| seen.insert(*phrase))
        .map(|phrase| ScoredPhrase::new(phrase, phrase_score(phrase, scores)))
        .collect();

    // Stable sort keeps first-occurrence order among equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    ranked
}

/// Selects the leading phrases of a ranking.
///
/// Drops phrases scoring below `min_score`, then keeps at most `limit`.
pub fn top_phrases(ranked: Vec<ScoredPhrase>, limit: usize, min_score: f64) -> Vec<ScoredPhrase> {
    ranked
        .into_iter()
        .filter(|p| p.score >= min_score)
        .take(limit)
        .collect()
}
