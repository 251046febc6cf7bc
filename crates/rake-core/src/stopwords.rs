//! Stopword collections.
//!
//! A `Stopwords` value is the set of words that act as phrase boundaries. It can be
//! built from any list of strings, parsed from the line-oriented stopword file format,
//! or taken from one of the built-in language lists provided by the `stop-words` crate
//! (Stopwords ISO).
//!
//! All entries are stored trimmed and lowercased so that membership checks and the
//! compiled matcher are case-insensitive.

use std::{collections::HashSet, fmt, slice, str};

use stop_words::LANGUAGE;

use crate::RakeError;

/// Built-in stopword languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English.
    #[default]
    English,
    /// French.
    French,
    /// German.
    German,
    /// Spanish.
    Spanish,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Dutch.
    Dutch,
    /// Russian.
    Russian,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: &'static [Self] = &[
        Self::English,
        Self::French,
        Self::German,
        Self::Spanish,
        Self::Italian,
        Self::Portuguese,
        Self::Dutch,
        Self::Russian,
    ];

    /// Returns the canonical lowercase name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::French => "french",
            Self::German => "german",
            Self::Spanish => "spanish",
            Self::Italian => "italian",
            Self::Portuguese => "portuguese",
            Self::Dutch => "dutch",
            Self::Russian => "russian",
        }
    }

    /// Maps to the `stop-words` crate language selector.
    fn source(self) -> LANGUAGE {
        match self {
            Self::English => LANGUAGE::English,
            Self::French => LANGUAGE::French,
            Self::German => LANGUAGE::German,
            Self::Spanish => LANGUAGE::Spanish,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Dutch => LANGUAGE::Dutch,
            Self::Russian => LANGUAGE::Russian,
        }
    }

    /// Comma-separated list of accepted names, for error messages.
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|l| l.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for Language {
    type Err = RakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "english" | "en" => Ok(Self::English),
            "french" | "fr" => Ok(Self::French),
            "german" | "de" => Ok(Self::German),
            "spanish" | "es" => Ok(Self::Spanish),
            "italian" | "it" => Ok(Self::Italian),
            "portuguese" | "pt" => Ok(Self::Portuguese),
            "dutch" | "nl" => Ok(Self::Dutch),
            "russian" | "ru" => Ok(Self::Russian),
            _ => Err(RakeError::UnknownLanguage {
                name: s.to_string(),
                expected: Self::expected(),
            }),
        }
    }
}

/// A case-insensitive set of stopwords.
///
/// Words keep their first-insertion order so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    /// Normalized words in insertion order.
    words: Vec<String>,
    /// Membership index over `words`.
    index: HashSet<String>,
}

impl Stopwords {
    /// Creates a collection from a list of words.
    ///
    /// Entries are trimmed and lowercased; empty entries and duplicates are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::default();
        stopwords.extend(words);
        stopwords
    }

    /// Parses the line-oriented stopword format.
    ///
    /// Each line holds one stopword. Lines are trimmed; blank lines and lines whose
    /// first character is `#` are skipped.
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Returns the built-in stopword list for a language.
    pub fn builtin(language: Language) -> Self {
        Self::new(stop_words::get(language.source()).iter())
    }

    /// Adds words to the collection.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let normalized = word.as_ref().trim().to_lowercase();
            if normalized.is_empty() || self.index.contains(&normalized) {
                continue;
            }
            self.index.insert(normalized.clone());
            self.words.push(normalized);
        }
    }

    /// Checks if a word is a stopword, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_lowercase())
    }

    /// Returns the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the collection holds no stopwords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the normalized stopwords in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Stopwords {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
