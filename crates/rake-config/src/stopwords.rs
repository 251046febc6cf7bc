//! Stopword loading.
//!
//! Stopword files are plain text with one stopword per line. Blank lines and lines
//! starting with `#` are ignored. A file that cannot be read, or that holds no
//! stopwords at all, is an error: extraction must never fall back to an empty
//! stopword set when a file was asked for.

use std::{fs, path::Path};

use rake_core::Stopwords;
use tracing::debug;

use crate::ConfigError;

/// Loads stopwords from a line-oriented file.
pub fn load_stopword_file(path: &Path) -> Result<Stopwords, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadStopwords {
        path: path.to_path_buf(),
        source,
    })?;

    let stopwords = Stopwords::parse(&contents);
    if stopwords.is_empty() {
        return Err(ConfigError::EmptyStopwords {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), count = stopwords.len(), "loaded stopword file");
    Ok(stopwords)
}
