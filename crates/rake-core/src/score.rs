//! Word tokenization and co-occurrence scoring.
//!
//! Every word gets three statistics computed over all candidate phrases:
//!
//! - `frequency`: number of occurrences
//! - `degree`: for each occurrence, the number of other words in the same phrase,
//!   plus the word's own frequency
//! - `score`: `degree / frequency`
//!
//! A word that only ever appears alone therefore scores exactly `1.0`, while words
//! that sit inside long phrases score higher.

use std::collections::{HashMap, hash_map};

use serde::Serialize;

/// Splits a phrase into words.
///
/// Words are maximal runs of alphanumeric characters. Purely numeric tokens are
/// dropped, but tokens mixing letters and digits (such as `web2`) are kept.
pub fn split_words(phrase: &str) -> Vec<&str> {
    phrase
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty() && !is_numeric(token))
        .collect()
}

/// Returns true if every character of the token is numeric.
fn is_numeric(token: &str) -> bool {
    token.chars().all(char::is_numeric)
}

/// Co-occurrence statistics for a single word.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WordStats {
    /// Occurrences across all phrases.
    pub frequency: usize,
    /// Co-occurrence degree, including the self-degree contribution.
    pub degree: usize,
    /// `degree / frequency`.
    pub score: f64,
}

/// Word statistics for one extraction, keyed by word.
#[derive(Debug, Clone, Default)]
pub struct WordScores {
    /// Statistics per distinct word.
    stats: HashMap<String, WordStats>,
}

impl WordScores {
    /// Returns the statistics for a word, if it occurred.
    pub fn get(&self, word: &str) -> Option<&WordStats> {
        self.stats.get(word)
    }

    /// Returns the score for a word, or `0.0` if it never occurred.
    pub fn score(&self, word: &str) -> f64 {
        self.get(word).map_or(0.0, |s| s.score)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Returns true if no words were scored.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Total number of word occurrences across all phrases.
    pub fn total_frequency(&self) -> usize {
        self.stats.values().map(|s| s.frequency).sum()
    }

    /// Iterates over words and their statistics in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, WordStats> {
        self.stats.iter()
    }

    /// Returns the statistics sorted by score descending, then word ascending.
    pub fn sorted(&self) -> Vec<(&str, &WordStats)> {
        let mut entries: Vec<_> = self.stats.iter().map(|(w, s)| (w.as_str(), s)).collect();
        entries.sort_by(|a, b| b.1.score.total_cmp(&a.1.score).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Computes word statistics over a list of phrases.
///
/// Phrases that contain no words contribute nothing.
pub fn score_words<S: AsRef<str>>(phrases: &[S]) -> WordScores {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut degree: HashMap<&str, usize> = HashMap::new();

    for phrase in phrases {
        let words = split_words(phrase.as_ref());
        let word_degree = words.len().saturating_sub(1);
        for word in words {
            *frequency.entry(word).or_default() += 1;
            *degree.entry(word).or_default() += word_degree;
        }
    }

    let stats = frequency
        .into_iter()
        .map(|(word, freq)| {
            let degree = degree.get(word).copied().unwrap_or_default() + freq;
            let stats = WordStats {
                frequency: freq,
                degree,
                score: degree as f64 / freq as f64,
            };
            (word.to_string(), stats)
        })
        .collect();

    WordScores { stats }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_words_on_non_alphanumerics() {
        assert_eq!(
            split_words("linear diophantine   equations"),
            vec!["linear", "diophantine", "equations"]
        );
        assert_eq!(split_words("c++ & rust/go"), vec!["c", "rust", "go"]);
    }

    #[test]
    fn split_words_drops_numeric_tokens() {
        assert_eq!(split_words("web2 released 2024"), vec!["web2", "released"]);
        assert_eq!(split_words("3 14 159"), Vec::<&str>::new());
    }

    #[test]
    fn split_words_handles_unicode_letters() {
        assert_eq!(split_words("größe straße"), vec!["größe", "straße"]);
    }

    #[test]
    fn split_words_never_returns_numeric_tokens() {
        let phrase = "42 a1 1a 007 x 3.14 v2.0 1,000 ٣";
        for token in split_words(phrase) {
            assert!(!is_numeric(token), "numeric token leaked: {token}");
        }
    }

    #[test]
    fn lone_words_score_one() {
        let scores = score_words(&["fox", "quick", "fox"]);
        let fox = scores.get("fox").unwrap();
        assert_eq!(fox.frequency, 2);
        assert_eq!(fox.degree, 2);
        assert_eq!(fox.score, 1.0);
        assert_eq!(scores.score("quick"), 1.0);
    }

    #[test]
    fn degree_accumulates_across_phrases_of_different_lengths() {
        // "quick" appears in a 3-word phrase and alone:
        // frequency 2, degree (2 + 0) + 2 = 4, score 2.0
        let scores = score_words(&["quick brown fox", "fox", "quick"]);

        let quick = scores.get("quick").unwrap();
        assert_eq!(quick.frequency, 2);
        assert_eq!(quick.degree, 4);
        assert_eq!(quick.score, 2.0);

        let brown = scores.get("brown").unwrap();
        assert_eq!(brown.frequency, 1);
        assert_eq!(brown.degree, 3);
        assert_eq!(brown.score, 3.0);
    }

    #[test]
    fn repeated_word_in_one_phrase_counts_each_occurrence() {
        // "very" occurs twice in a 3-word phrase: frequency 2, degree 2*2 + 2 = 6
        let scores = score_words(&["very very good"]);
        let very = scores.get("very").unwrap();
        assert_eq!(very.frequency, 2);
        assert_eq!(very.degree, 6);
        assert_eq!(very.score, 3.0);
    }

    #[test]
    fn wordless_phrases_are_skipped() {
        let scores = score_words(&["2024", "!!", "rust"]);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.score("rust"), 1.0);
    }

    #[test]
    fn total_frequency_matches_token_count() {
        let phrases = [
            "compatibility",
            "systems",
            "linear constraints",
            "set",
            "natural numbers",
            "linear diophantine equations",
            "strict inequations",
            "systems",
        ];
        let scores = score_words(&phrases);
        let tokens: usize = phrases.iter().map(|p| split_words(p).len()).sum();
        assert_eq!(scores.total_frequency(), tokens);
        assert!(scores.iter().all(|(_, s)| s.frequency >= 1));
    }

    #[test]
    fn unknown_words_score_zero() {
        let scores = score_words(&["rust"]);
        assert!(scores.get("go").is_none());
        assert_eq!(scores.score("go"), 0.0);
    }

    #[test]
    fn sorted_orders_by_score_then_word() {
        let scores = score_words(&["beta alpha", "gamma"]);
        let words: Vec<_> = scores.sorted().into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }
}
