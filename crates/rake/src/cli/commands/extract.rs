//! Implementation of `rake extract`.

use std::process::ExitCode;

use rake_core::{ScoredPhrase, top_phrases};
use tracing::info;

use super::shared::Source;
use crate::cli::{
    args::ExtractCommand,
    context::CommandContext,
    output::{JsonExtractOutput, JsonSource, dim, header, keyword_table, print_json},
};

/// Extracts and prints ranked key phrases for each input.
pub fn run(ctx: &CommandContext, cmd: &ExtractCommand) -> ExitCode {
    let rake = match ctx.extractor(&cmd.stopwords) {
        Ok(rake) => rake,
        Err(code) => return code,
    };

    let limit = cmd.limit.unwrap_or(ctx.config.extract.limit);
    let min_score = cmd.min_score.unwrap_or(ctx.config.extract.min_score);

    let sources = Source::from_args(&cmd.files);
    let mut results: Vec<(String, Vec<ScoredPhrase>)> = Vec::with_capacity(sources.len());
    for source in &sources {
        let text = match source.read() {
            Ok(text) => text,
            Err(code) => return code,
        };
        let keywords = top_phrases(rake.extract(&text), limit, min_score);
        info!(source = %source.label(), keywords = keywords.len(), "extracted");
        results.push((source.label(), keywords));
    }

    if cmd.json {
        let output = JsonExtractOutput {
            sources: results
                .iter()
                .map(|(source, keywords)| JsonSource {
                    source: source.clone(),
                    keywords,
                })
                .collect(),
        };
        return print_json(&output);
    }

    let show_headers = results.len() > 1;
    for (i, (source, keywords)) in results.iter().enumerate() {
        if show_headers {
            if i > 0 {
                println!();
            }
            println!("{}", header(source));
        }
        if keywords.is_empty() {
            println!("{}", dim("No keywords found."));
        } else {
            println!("{}", keyword_table(keywords));
        }
    }

    ExitCode::SUCCESS
}
