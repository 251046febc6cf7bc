//! Sentence splitting on punctuation.

/// Characters that end a sentence-like segment.
///
/// Includes the curly single quotes (U+2018, U+2019) and the en dash (U+2013).
const SENTENCE_DELIMITERS: &[char] = &[
    '.', '?', '!', ',', ';', '-', '"', '\'', '(', ')', '\\', '\u{2018}', '\u{2019}', '\u{2013}',
    '\t',
];

/// Returns true if `c` separates sentences.
fn is_sentence_delimiter(c: char) -> bool {
    SENTENCE_DELIMITERS.contains(&c)
}

/// Splits text into sentence-like segments.
///
/// Any run of delimiter characters is a single split point, so no empty segments
/// are produced. Segments are returned untrimmed; whitespace-only segments may
/// occur and are discarded during phrase segmentation.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_sentence_delimiter)
        .filter(|segment| !segment.is_empty())
}
