//! Clap argument definitions for the `rake` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "rake")]
#[command(about = "Rapid Automatic Keyword Extraction")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RAKE_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the configured stopword collection.
#[derive(Args, Debug, Clone, Default)]
pub struct StopwordArgs {
    /// Stopword file, one word per line (replaces the configured list)
    #[arg(short = 's', long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Built-in stopword language (replaces the configured list)
    #[arg(short = 'l', long, value_name = "NAME", conflicts_with = "stopwords")]
    pub language: Option<String>,
}

/// Arguments for `rake extract`.
#[derive(Args, Debug, Clone)]
pub struct ExtractCommand {
    /// Input files; reads stdin when none are given or for `-`
    pub files: Vec<PathBuf>,

    /// Maximum phrases per input [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Drop phrases scoring below this [default: 0]
    #[arg(long)]
    pub min_score: Option<f64>,

    #[command(flatten)]
    /// Stopword overrides.
    pub stopwords: StopwordArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `rake inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Input file; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    #[command(flatten)]
    /// Stopword overrides.
    pub stopwords: StopwordArgs,
}

/// Arguments for `rake stopwords`.
#[derive(Args, Debug, Clone)]
pub struct StopwordsCommand {
    /// Print only the number of stopwords
    #[arg(long)]
    pub count: bool,

    #[command(flatten)]
    /// Stopword overrides.
    pub stopwords: StopwordArgs,
}

/// Arguments for `rake init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.rake.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `rake` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract ranked key phrases from text
    #[command(after_help = "\
EXAMPLES:
  rake extract paper.txt
  rake extract -n 5 notes/*.txt
  cat abstract.txt | rake extract --json
  rake extract -l german bericht.txt
  rake extract -s stoplist.txt --min-score 2 paper.txt")]
    Extract(ExtractCommand),

    /// Show every stage of extraction for one input
    Inspect(InspectCommand),

    /// List the effective stopword collection
    Stopwords(StopwordsCommand),

    /// Initialize rake configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}
