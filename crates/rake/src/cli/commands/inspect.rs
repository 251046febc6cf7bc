//! Implementation of `rake inspect`.

use std::{ops::Range, process::ExitCode};

use rake_core::Analysis;

use super::shared::Source;
use crate::cli::{
    args::InspectCommand,
    context::CommandContext,
    output::{dim, header, keyword_table, mark_spans, word_table},
};

/// Shows every stage of the extraction pipeline for one input.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let rake = match ctx.extractor(&cmd.stopwords) {
        Ok(rake) => rake,
        Err(code) => return code,
    };

    let source = cmd
        .file
        .as_deref()
        .map_or(Source::Stdin, Source::from_arg);
    let text = match source.read() {
        Ok(text) => text,
        Err(code) => return code,
    };

    let analysis = rake.analyze(&text);

    println!(
        "--- {} ---",
        header(&format!("sentences ({})", analysis.sentences.len()))
    );
    println!("{}", dim("stopwords dimmed, candidate phrases highlighted"));
    for sentence in &analysis.sentences {
        let spans = rake.matcher().find_delimiter_spans(sentence);
        println!("  {}", mark_spans(sentence.trim(), &shift_spans(sentence, &spans)));
    }
    println!();

    print_phrases(&analysis);

    println!("--- {} ---", header(&format!("words ({})", analysis.words.len())));
    if analysis.words.is_empty() {
        println!("{}", dim("  (none)"));
    } else {
        println!("{}", word_table(&analysis.words));
    }
    println!();

    println!(
        "--- {} ---",
        header(&format!("keywords ({})", analysis.keywords.len()))
    );
    if analysis.keywords.is_empty() {
        println!("{}", dim("  (none)"));
    } else {
        println!("{}", keyword_table(&analysis.keywords));
    }

    ExitCode::SUCCESS
}

/// Prints candidate phrases in input order, repeats included.
fn print_phrases(analysis: &Analysis) {
    println!(
        "--- {} ---",
        header(&format!("phrases ({})", analysis.phrases.len()))
    );
    if analysis.phrases.is_empty() {
        println!("{}", dim("  (none)"));
    }
    for phrase in &analysis.phrases {
        println!("  {phrase}");
    }
    println!();
}

/// Re-bases spans found in `sentence` onto `sentence.trim()`, dropping any that
/// fall outside the trimmed text.
fn shift_spans(sentence: &str, spans: &[Range<usize>]) -> Vec<Range<usize>> {
    let lead = sentence.len() - sentence.trim_start().len();
    let end = lead + sentence.trim().len();
    spans
        .iter()
        .filter(|span| span.start >= lead && span.end <= end)
        .map(|span| span.start - lead..span.end - lead)
        .collect()
}
