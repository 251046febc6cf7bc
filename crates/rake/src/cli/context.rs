//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use rake_config::{Config, ConfigError};
use rake_core::{Rake, Stopwords};
use tracing::debug;

use crate::cli::args::StopwordArgs;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init` and `check`, which must work even when an existing config
    /// file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Resolves the stopword collection after applying command-line overrides.
    ///
    /// `--stopwords` and `--language` replace the configured base list; configured
    /// `extra` words still apply.
    pub fn stopwords(&self, args: &StopwordArgs) -> Result<Stopwords, ExitCode> {
        self.resolve_stopwords(args).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Builds an extractor for the effective stopword collection.
    pub fn extractor(&self, args: &StopwordArgs) -> Result<Rake, ExitCode> {
        let stopwords = self.stopwords(args)?;
        Rake::new(stopwords).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Applies the overrides to a copy of the configured stopword settings and loads them.
    fn resolve_stopwords(&self, args: &StopwordArgs) -> Result<Stopwords, ConfigError> {
        let mut config = self.config.clone();
        if let Some(language) = &args.language {
            config.stopwords.language.clone_from(language);
            config.stopwords.file = None;
        }
        if let Some(file) = &args.stopwords {
            config.stopwords.file = Some(self.cwd.join(file));
        }
        let stopwords = config.load_stopwords()?;
        debug!(count = stopwords.len(), "resolved stopwords");
        Ok(stopwords)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
