//! Command-line interface for rake, the Rapid Automatic Keyword Extraction tool.
//!
//! `rake extract` ranks the key phrases of text files or stdin. The remaining
//! subcommands inspect the pipeline and manage `.rake.toml` configuration.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = match &cli.command {
        Commands::Init(_) | Commands::Check => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(&cli.command, &ctx),
        Err(code) => code,
    }
}
