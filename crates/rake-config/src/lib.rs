//! Configuration system for rake.
//!
//! rake uses TOML configuration files named `.rake.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.rake.toml` files
//! found, then loading `~/.rake.toml` as the global config with lowest precedence.
//!
//! The resolved [`Config`] decides which stopword collection extraction runs with and how
//! many phrases are reported.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod stopwords;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config, is_home_dir,
};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawExtractSettings, RawStopwordSettings, parse_config_file, parse_config_str,
};
use rake_core::{Language, Stopwords};
pub use resolve::resolve_path;
use serde::{Deserialize, Serialize};
pub use stopwords::load_stopword_file;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Built-in stopword language used when no config names one.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Default maximum number of phrases reported per source.
pub const DEFAULT_LIMIT: usize = 20;

/// Default minimum phrase score reported.
pub const DEFAULT_MIN_SCORE: f64 = 0.0;

/// Top-level merged configuration for rake.
///
/// This represents the fully resolved configuration after merging all discovered `.rake.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Stopword selection.
    pub stopwords: StopwordSettings,
    /// Extraction output settings.
    pub extract: ExtractSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.rake.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.rake.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.rake.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A stopword file that doesn't exist or isn't a regular file
    /// - A language with no built-in stopword list
    /// - A negative or non-finite `min_score`
    /// - A `limit` of zero
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.rake.toml` file, with the stopword file shown
    /// as its resolved path.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            stopwords: &self.stopwords,
            extract: &self.extract,
        };
        toml::to_string_pretty(&serializable)
            .map_err(|source| ConfigError::SerializeToml { source })
    }

    /// Parses the configured built-in language.
    pub fn language(&self) -> Result<Language, ConfigError> {
        self.stopwords
            .language
            .parse()
            .map_err(|source| ConfigError::InvalidLanguage { source })
    }

    /// Builds the stopword collection this configuration selects.
    ///
    /// A configured file replaces the built-in language list entirely. Extra words are
    /// appended in either case.
    pub fn load_stopwords(&self) -> Result<Stopwords, ConfigError> {
        let mut stopwords = match &self.stopwords.file {
            Some(path) => load_stopword_file(path)?,
            None => Stopwords::builtin(self.language()?),
        };
        stopwords.extend(&self.stopwords.extra);
        Ok(stopwords)
    }
}

/// Stopword selection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StopwordSettings {
    /// Built-in stopword list name.
    pub language: String,
    /// Stopword file replacing the built-in list, already resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Additional stopwords appended to the collection.
    pub extra: Vec<String>,
}

impl Default for StopwordSettings {
    fn default() -> Self {
        Self {
            language: String::from(DEFAULT_LANGUAGE),
            file: None,
            extra: Vec::new(),
        }
    }
}

/// Extraction output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Maximum phrases reported per source.
    pub limit: usize,
    /// Phrases scoring below this are not reported.
    pub min_score: f64,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Stopword selection.
    stopwords: &'a StopwordSettings,
    /// Extraction output settings.
    extract: &'a ExtractSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopword_settings_defaults() {
        let settings = StopwordSettings::default();
        assert_eq!(settings.language, "english");
        assert!(settings.file.is_none());
        assert!(settings.extra.is_empty());
    }

    #[test]
    fn test_extract_settings_defaults() {
        let settings = ExtractSettings::default();
        assert_eq!(settings.limit, 20);
        assert_eq!(settings.min_score, 0.0);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.config_root.is_none());
        assert_eq!(config.language().unwrap(), Language::English);
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config::default();
        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[stopwords]"));
        assert!(toml.contains("[extract]"));
        assert!(toml.contains("language = \"english\""));
        assert!(toml.contains("limit = 20"));
        assert!(!toml.contains("file ="));

        let parsed: toml::Value = toml::from_str(&toml).unwrap();
        assert!(parsed.get("stopwords").is_some());
        assert!(parsed.get("extract").is_some());
    }

    #[test]
    fn test_settings_to_toml_includes_file() {
        let mut config = Config::default();
        config.stopwords.file = Some(PathBuf::from("/lists/stop.txt"));
        config.stopwords.extra = vec!["lorem".into()];

        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("file = \"/lists/stop.txt\""));
        assert!(toml.contains("lorem"));
    }

    #[test]
    fn test_language_accepts_iso_code() {
        let mut config = Config::default();
        config.stopwords.language = "de".into();
        assert_eq!(config.language().unwrap(), Language::German);
    }
}
