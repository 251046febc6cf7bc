//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, ExtractSettings, StopwordSettings,
    parse::{RawConfig, RawExtractSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file, used to resolve relative paths.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Stopword file: first definition wins, resolved against its own config file
/// - Extra stopwords: concatenated, highest precedence first
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let stopwords = merge_stopword_settings(configs)?;
    let extract = merge_extract_settings(configs);
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        stopwords,
        extract,
        config_root,
    })
}

/// Merges stopword settings across configs.
fn merge_stopword_settings(configs: &[ParsedConfig]) -> Result<StopwordSettings, ConfigError> {
    let mut result = StopwordSettings::default();
    let mut language = None;
    let mut file = None;

    for parsed in configs {
        let Some(raw) = &parsed.config.stopwords else {
            continue;
        };
        if language.is_none() {
            language.clone_from(&raw.language);
        }
        if file.is_none()
            && let Some(path) = &raw.file
        {
            file = Some(resolve_path(path, parsed.dir())?);
        }
        if let Some(extra) = &raw.extra {
            result.extra.extend(extra.iter().cloned());
        }
    }

    if let Some(language) = language {
        result.language = language;
    }
    result.file = file;
    result.extra = dedup_preserve_order(result.extra);

    Ok(result)
}

/// Merges extraction settings, taking first defined value for each field.
fn merge_extract_settings(configs: &[ParsedConfig]) -> ExtractSettings {
    let mut result = ExtractSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref extract) = parsed.config.extract {
            apply_raw_extract_settings(&mut result, extract);
        }
    }

    result
}

/// Applies raw extraction settings to result, overwriting any present values.
fn apply_raw_extract_settings(result: &mut ExtractSettings, raw: &RawExtractSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.min_score {
        result.min_score = v;
    }
}

/// Deduplicates words case-insensitively while preserving original order.
fn dedup_preserve_order(words: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    let mut result = Vec::with_capacity(words.len());
    for word in words {
        let key = word.trim().to_lowercase();
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        result.push(word);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_LANGUAGE, DEFAULT_LIMIT, parse::parse_config};

    fn parsed(path: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config(toml).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty() {
        let config = merge_configs(&[]).unwrap();
        assert_eq!(config.stopwords.language, DEFAULT_LANGUAGE);
        assert_eq!(config.extract.limit, DEFAULT_LIMIT);
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_merge_first_scalar_wins() {
        let configs = [
            parsed("/a/b/.rake.toml", "[extract]\nlimit = 3\n"),
            parsed(
                "/a/.rake.toml",
                "[extract]\nlimit = 9\nmin_score = 2.0\n[stopwords]\nlanguage = \"french\"\n",
            ),
        ];

        let config = merge_configs(&configs).unwrap();

        assert_eq!(config.extract.limit, 3);
        assert_eq!(config.extract.min_score, 2.0);
        assert_eq!(config.stopwords.language, "french");
        assert_eq!(config.config_root, Some(PathBuf::from("/a/b")));
    }

    #[test]
    fn test_merge_resolves_file_against_defining_config() {
        let configs = [
            parsed("/a/b/.rake.toml", "[extract]\nlimit = 3\n"),
            parsed("/a/.rake.toml", "[stopwords]\nfile = \"lists/stop.txt\"\n"),
        ];

        let config = merge_configs(&configs).unwrap();

        assert_eq!(
            config.stopwords.file,
            Some(PathBuf::from("/a/lists/stop.txt"))
        );
    }

    #[test]
    fn test_merge_first_file_wins() {
        let configs = [
            parsed("/a/b/.rake.toml", "[stopwords]\nfile = \"near.txt\"\n"),
            parsed("/a/.rake.toml", "[stopwords]\nfile = \"far.txt\"\n"),
        ];

        let config = merge_configs(&configs).unwrap();

        assert_eq!(config.stopwords.file, Some(PathBuf::from("/a/b/near.txt")));
    }

    #[test]
    fn test_merge_concatenates_extra() {
        let configs = [
            parsed("/a/b/.rake.toml", "[stopwords]\nextra = [\"foo\", \"Bar\"]\n"),
            parsed("/a/.rake.toml", "[stopwords]\nextra = [\"bar\", \"baz\"]\n"),
        ];

        let config = merge_configs(&configs).unwrap();

        assert_eq!(config.stopwords.extra, vec!["foo", "Bar", "baz"]);
    }
}
