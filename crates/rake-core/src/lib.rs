//! Rapid Automatic Keyword Extraction (RAKE).
//!
//! RAKE finds key phrases in a single document without any training data or corpus
//! statistics. The pipeline runs in five stages:
//!
//! 1. **Stopword matching**: a compiled, boundary-aware matcher built once per
//!    stopword collection
//! 2. **Sentence splitting**: text is cut on punctuation runs
//! 3. **Phrase segmentation**: sentences are cut at stopwords into candidate phrases
//! 4. **Word scoring**: each word is scored by co-occurrence degree over frequency
//! 5. **Phrase ranking**: each distinct phrase scores the sum of its word scores
//!
//! ```
//! use rake_core::{Rake, Stopwords};
//!
//! let rake = Rake::new(Stopwords::new(["the", "is", "and"])).unwrap();
//! let keywords = rake.extract("The quick brown fox. The fox is quick.");
//! assert_eq!(keywords[0].phrase, "quick brown fox");
//! ```
//!
//! The crate performs no I/O. Stopword files and configuration are handled by the
//! callers.

#![warn(missing_docs)]

mod error;
mod matcher;
mod phrase;
mod rank;
mod score;
mod sentence;
mod stopwords;

pub use error::RakeError;
pub use matcher::StopwordMatcher;
pub use phrase::segment_phrases;
pub use rank::{ScoredPhrase, phrase_score, rank_phrases, top_phrases};
pub use score::{WordScores, WordStats, score_words, split_words};
pub use sentence::split_sentences;
pub use stopwords::{Language, Stopwords};
use tracing::debug;

/// Every intermediate of a single extraction.
///
/// Produced by [`Rake::analyze`] for inspection and debugging.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Sentence segments, untrimmed.
    pub sentences: Vec<String>,
    /// Candidate phrases in input order, repeats included.
    pub phrases: Vec<String>,
    /// Word statistics over all phrases.
    pub words: WordScores,
    /// Distinct phrases ranked by score.
    pub keywords: Vec<ScoredPhrase>,
}

/// A keyword extractor bound to one stopword collection.
///
/// The stopword matcher is compiled once in [`Rake::new`] and reused by every
/// call to [`Rake::extract`]. Extraction holds no mutable state, so one extractor
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct Rake {
    /// The collection the matcher was built from.
    stopwords: Stopwords,
    /// Compiled matcher for `stopwords`.
    matcher: StopwordMatcher,
}

impl Rake {
    /// Creates an extractor, compiling the stopword matcher.
    pub fn new(stopwords: Stopwords) -> Result<Self, RakeError> {
        let matcher = StopwordMatcher::build(&stopwords)?;
        Ok(Self { stopwords, matcher })
    }

    /// Creates an extractor using a built-in stopword list.
    pub fn with_language(language: Language) -> Result<Self, RakeError> {
        Self::new(Stopwords::builtin(language))
    }

    /// Returns the stopwords this extractor splits on.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Returns the compiled stopword matcher.
    pub fn matcher(&self) -> &StopwordMatcher {
        &self.matcher
    }

    /// Extracts key phrases, highest score first.
    ///
    /// Empty or whitespace-only text yields an empty list.
    pub fn extract(&self, text: &str) -> Vec<ScoredPhrase> {
        let phrases = segment_phrases(split_sentences(text), &self.matcher);
        let words = score_words(&phrases);
        let keywords = rank_phrases(&phrases, &words);
        debug!(
            phrases = phrases.len(),
            words = words.len(),
            keywords = keywords.len(),
            "extracted keywords"
        );
        keywords
    }

    /// Runs the extraction pipeline and keeps every intermediate result.
    pub fn analyze(&self, text: &str) -> Analysis {
        let sentences: Vec<String> = split_sentences(text).map(str::to_string).collect();
        let phrases = segment_phrases(sentences.iter().map(String::as_str), &self.matcher);
        let words = score_words(&phrases);
        let keywords = rank_phrases(&phrases, &words);
        debug!(
            sentences = sentences.len(),
            phrases = phrases.len(),
            words = words.len(),
            keywords = keywords.len(),
            "analyzed text"
        );
        Analysis {
            sentences,
            phrases,
            words,
            keywords,
        }
    }
}

#[cfg(test)]
mod test {
    use std::thread;

    use super::*;

    /// Abstract of the paper that introduced RAKE.
    const ABSTRACT: &str = "Compatibility of systems of linear constraints over the set of \
        natural numbers. Criteria of compatibility of a system of linear Diophantine equations, \
        strict inequations, and nonstrict inequations are considered. Upper bounds for \
        components of a minimal set of solutions and algorithms of construction of minimal \
        generating sets of solutions for all types of systems are given. These criteria and the \
        corresponding algorithms for constructing a minimal supporting set of solutions can be \
        used in solving all the considered types of systems and systems of mixed types.";

    /// Stopwords from the RAKE paper's worked example that occur in `ABSTRACT`.
    const PAPER_STOPWORDS: &[&str] = &[
        "of", "over", "the", "a", "and", "are", "for", "all", "these", "can", "be", "in", "used",
        "given", "considered",
    ];

    fn rake(words: &[&str]) -> Rake {
        Rake::new(Stopwords::new(words.iter())).unwrap()
    }

    fn find<'a>(keywords: &'a [ScoredPhrase], phrase: &str) -> &'a ScoredPhrase {
        keywords.iter().find(|k| k.phrase == phrase).unwrap()
    }

    #[test]
    fn quick_brown_fox() {
        let rake = rake(&["the", "is", "and"]);
        let analysis = rake.analyze("The quick brown fox. The fox is quick.");

        assert_eq!(analysis.phrases, vec!["quick brown fox", "fox", "quick"]);
        assert_eq!(analysis.words.get("quick").unwrap().frequency, 2);

        let keywords = &analysis.keywords;
        assert_eq!(keywords[0].phrase, "quick brown fox");
        assert!(keywords[0].score > find(keywords, "fox").score);
        assert!(keywords[0].score > find(keywords, "quick").score);
    }

    #[test]
    fn empty_text_yields_nothing() {
        let rake = rake(&["the"]);
        assert!(rake.extract("").is_empty());
        assert!(rake.extract("   \n\t  ").is_empty());
        assert!(rake.extract("the. The, THE").is_empty());
    }

    #[test]
    fn sentence_without_stopwords_is_one_phrase() {
        let rake = rake(&["zebra"]);
        let keywords = rake.extract("  Memory Safety Without Garbage Collection ");
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].phrase, "memory safety without garbage collection");
        assert_eq!(keywords[0].score, 25.0);
    }

    #[test]
    fn empty_stopword_collection_keeps_sentences_whole() {
        let rake = Rake::new(Stopwords::default()).unwrap();
        let keywords = rake.extract("alpha beta, gamma");
        let phrases: Vec<_> = keywords.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn word_in_phrases_of_different_lengths() {
        // "safety" occurs in a 2-word phrase and a 3-word phrase:
        // frequency 2, degree 1 + 2 + 2 = 5, score 2.5
        let rake = rake(&["and"]);
        let analysis = rake.analyze("memory safety and thread safety guarantees");
        let safety = analysis.words.get("safety").unwrap();
        assert_eq!(safety.frequency, 2);
        assert_eq!(safety.degree, 5);
        assert_eq!(safety.score, 2.5);
    }

    #[test]
    fn regex_special_stopword_is_literal() {
        let rake = rake(&["a*b"]);
        let phrases = rake.analyze("foo a*b bar aab baz").phrases;
        assert_eq!(phrases, vec!["foo", "bar aab baz"]);
    }

    #[test]
    fn extract_matches_analyze() {
        let rake = rake(PAPER_STOPWORDS);
        assert_eq!(rake.extract(ABSTRACT), rake.analyze(ABSTRACT).keywords);
    }

    #[test]
    fn extraction_is_deterministic() {
        let rake = Rake::with_language(Language::English).unwrap();
        let first = rake.extract(ABSTRACT);
        let second = rake.extract(ABSTRACT);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn paper_abstract_ranking() {
        let rake = rake(PAPER_STOPWORDS);
        let keywords = rake.extract(ABSTRACT);

        let top: Vec<_> = keywords.iter().take(9).map(|k| k.phrase.as_str()).collect();
        assert_eq!(
            top,
            vec![
                "minimal generating sets",
                "linear diophantine equations",
                "minimal supporting set",
                "minimal set",
                "linear constraints",
                // four-way tie at 4.0, in order of first occurrence
                "natural numbers",
                "strict inequations",
                "nonstrict inequations",
                "upper bounds",
            ]
        );

        let close = |phrase: &str, expected: f64| {
            let score = find(&keywords, phrase).score;
            assert!((score - expected).abs() < 1e-9, "{phrase}: {score}");
        };
        close("minimal generating sets", 8.0 / 3.0 + 6.0);
        close("linear diophantine equations", 8.5);
        close("minimal supporting set", 8.0 / 3.0 + 5.0);
        close("corresponding algorithms", 3.5);
        close("mixed types", 2.0 + 4.0 / 3.0);
        close("compatibility", 1.0);

        for pair in keywords.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn shared_across_threads() {
        let rake = rake(&["the", "is", "and"]);
        let expected = rake.extract("The quick brown fox. The fox is quick.");

        thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| rake.extract("The quick brown fox. The fox is quick.")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
