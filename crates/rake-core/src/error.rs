//! Error types for keyword extraction.

use thiserror::Error;

/// Errors that can occur when preparing an extractor.
#[derive(Debug, Error)]
pub enum RakeError {
    /// The stopword alternation could not be compiled.
    #[error("failed to compile stopword pattern ({count} stopwords): {source}")]
    StopwordPattern {
        /// Number of stopwords in the collection.
        count: usize,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// No built-in stopword list exists for the requested language.
    #[error("unknown stopword language '{name}', expected one of: {expected}")]
    UnknownLanguage {
        /// The requested language name.
        name: String,
        /// Comma-separated list of supported names.
        expected: String,
    },
}
