//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod extract;
pub mod init;
pub mod inspect;
mod shared;
pub mod stopwords;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Extract(cmd) => extract::run(ctx, cmd),
        Commands::Inspect(cmd) => inspect::run(ctx, cmd),
        Commands::Stopwords(cmd) => stopwords::run(ctx, cmd),
        Commands::Init(cmd) => init::run(ctx, cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
