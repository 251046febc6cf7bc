//! Error types for rake configuration.

use std::io;
use std::path::PathBuf;

use rake_core::RakeError;
use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading configuration or stopwords.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to render settings as TOML.
    #[error("failed to serialize settings: {source}")]
    SerializeToml {
        /// Underlying TOML serialization error.
        source: ser::Error,
    },

    /// Failed to read a stopword file.
    #[error("failed to read stopword file {path}: {source}")]
    ReadStopwords {
        /// Path to the stopword file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A stopword file contained no stopwords.
    #[error("stopword file contains no stopwords: {path}")]
    EmptyStopwords {
        /// Path to the stopword file.
        path: PathBuf,
    },

    /// The configured stopword language is not available.
    #[error("invalid stopword language: {source}")]
    InvalidLanguage {
        /// Underlying lookup error.
        source: RakeError,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}
