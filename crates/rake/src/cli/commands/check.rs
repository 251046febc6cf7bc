//! Implementation of `rake check`.

use std::process::ExitCode;

use rake_config::{Config, ConfigWarning, discover_config_files, is_global_config};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Exit codes for `rake check`.
///
/// Warnings and hard errors are not distinguished; both exit with 1.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings, or could not be loaded at all.
    pub const PROBLEMS: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and the stopword collection it selects.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("  {}", dim("(none found, using defaults)"));
    }
    for path in &config_files {
        let scope = if is_global_config(path) {
            " (global)"
        } else {
            ""
        };
        println!("  {}{}", path.display(), dim(scope));
    }
    println!();

    let config = match Config::load_from_files(&config_files) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_codes::PROBLEMS;
        }
    };

    let warnings = config.validate();

    println!("{}", subheader("Stopwords:"));
    match config.load_stopwords() {
        Ok(stopwords) => {
            let base = match &config.stopwords.file {
                Some(path) => path.display().to_string(),
                None => config.stopwords.language.clone(),
            };
            println!("  {} words from {base}", stopwords.len());
        }
        Err(e) => {
            eprintln!("error: {e}");
            print_warnings(&warnings);
            return exit_codes::PROBLEMS;
        }
    }
    println!();

    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    print_warnings(&warnings);
    exit_codes::PROBLEMS
}

/// Prints warnings followed by deduplicated hints for resolving them.
fn print_warnings(warnings: &[ConfigWarning]) {
    if warnings.is_empty() {
        return;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in warnings {
        println!("  - {}", warning(&w.to_string()));
    }
    println!();

    let mut hints: Vec<&str> = warnings.iter().map(hint).collect();
    hints.sort_unstable();
    hints.dedup();

    println!("{}", subheader("Hints:"));
    for hint in hints {
        println!("  - {hint}");
    }
}

/// Returns a hint for resolving a warning.
fn hint(warning: &ConfigWarning) -> &'static str {
    match warning {
        ConfigWarning::StopwordFileMissing { .. } => {
            "Create the stopword file or fix [stopwords].file; paths are relative to the config file."
        }
        ConfigWarning::StopwordFileNotFile { .. } => {
            "[stopwords].file must point to a text file, not a directory."
        }
        ConfigWarning::UnknownLanguage { .. } => {
            "Built-in languages: english, french, german, spanish, italian, portuguese, dutch, russian."
        }
        ConfigWarning::InvalidMinScore { .. } => {
            "Set [extract].min_score to 0 or a positive number."
        }
        ConfigWarning::ZeroLimit => "Set [extract].limit to at least 1.",
    }
}
