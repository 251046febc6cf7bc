//! Implementation of `rake stopwords`.

use std::process::ExitCode;

use crate::cli::{args::StopwordsCommand, context::CommandContext};

/// Prints the effective stopword collection, one word per line.
pub fn run(ctx: &CommandContext, cmd: &StopwordsCommand) -> ExitCode {
    let stopwords = match ctx.stopwords(&cmd.stopwords) {
        Ok(stopwords) => stopwords,
        Err(code) => return code,
    };

    if cmd.count {
        println!("{}", stopwords.len());
        return ExitCode::SUCCESS;
    }

    for word in &stopwords {
        println!("{word}");
    }
    ExitCode::SUCCESS
}
