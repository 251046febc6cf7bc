//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use rake_core::Language;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The configured stopword file does not exist.
    StopwordFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The configured stopword file exists but is not a regular file.
    StopwordFileNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// The configured language has no built-in stopword list.
    UnknownLanguage {
        /// The configured language name.
        name: String,
    },
    /// `min_score` is negative or not a finite number.
    InvalidMinScore {
        /// The configured value.
        value: f64,
    },
    /// `limit` is zero, so extraction never outputs anything.
    ZeroLimit,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopwordFileMissing { path } => {
                write!(f, "stopword file does not exist: {path}")
            }
            Self::StopwordFileNotFile { path } => {
                write!(f, "stopword file is not a regular file: {path}")
            }
            Self::UnknownLanguage { name } => {
                write!(f, "no built-in stopword list for language '{name}'")
            }
            Self::InvalidMinScore { value } => {
                write!(f, "min_score must be a non-negative number, got {value}")
            }
            Self::ZeroLimit => write!(f, "extract limit is 0, no phrases will be shown"),
        }
    }
}

/// Validates a configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match &config.stopwords.file {
        Some(path) if !path.exists() => warnings.push(ConfigWarning::StopwordFileMissing {
            path: path.display().to_string(),
        }),
        Some(path) if !path.is_file() => warnings.push(ConfigWarning::StopwordFileNotFile {
            path: path.display().to_string(),
        }),
        _ => {}
    }

    if config.stopwords.language.parse::<Language>().is_err() {
        warnings.push(ConfigWarning::UnknownLanguage {
            name: config.stopwords.language.clone(),
        });
    }

    let min_score = config.extract.min_score;
    if !min_score.is_finite() || min_score < 0.0 {
        warnings.push(ConfigWarning::InvalidMinScore { value: min_score });
    }

    if config.extract.limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit);
    }

    warnings
}
