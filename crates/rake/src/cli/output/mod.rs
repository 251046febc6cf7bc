//! Rendering and JSON serialization for CLI output.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
pub use rake_highlight::{dim, header, mark_spans, subheader, warning};
use rake_highlight::Highlighter;
use rake_core::{ScoredPhrase, WordScores};
use serde::Serialize;

/// Keywords extracted from one input.
#[derive(Serialize)]
pub struct JsonSource<'a> {
    /// Input label, `-` for stdin.
    pub source: String,
    /// Ranked phrases, highest score first.
    pub keywords: &'a [ScoredPhrase],
}

/// JSON output of `rake extract`.
#[derive(Serialize)]
pub struct JsonExtractOutput<'a> {
    /// One entry per input, in argument order.
    pub sources: Vec<JsonSource<'a>>,
}

/// Prints a value as pretty JSON on stdout.
///
/// The JSON is highlighted only when stdout is a terminal, so piped output stays parseable.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", render_json(&json, io::stdout().is_terminal()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Highlights serialized JSON for a terminal, or returns it unchanged.
fn render_json(json: &str, terminal: bool) -> String {
    if terminal {
        Highlighter::new().highlight_json(json)
    } else {
        json.to_string()
    }
}

/// Formats a score for display.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// Creates a table in the CLI's shared style.
fn new_table<const N: usize>(headers: [&str; N]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(headers.to_vec());
    table
}

/// Right-aligned numeric cell.
fn number(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Builds the rank/phrase/score table for a keyword list.
pub fn keyword_table(keywords: &[ScoredPhrase]) -> Table {
    let mut table = new_table(["#", "Phrase", "Score"]);
    for (rank, keyword) in keywords.iter().enumerate() {
        table.add_row(vec![
            number(rank + 1),
            Cell::new(&keyword.phrase),
            number(format_score(keyword.score)),
        ]);
    }
    table
}

/// Builds the per-word statistics table, best scoring words first.
pub fn word_table(words: &WordScores) -> Table {
    let mut table = new_table(["Word", "Freq", "Degree", "Score"]);
    for (word, stats) in words.sorted() {
        table.add_row(vec![
            Cell::new(word),
            number(stats.frequency),
            number(stats.degree),
            number(format_score(stats.score)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use rake_core::score_words;

    use super::*;

    #[test]
    fn keyword_table_lists_ranks() {
        let keywords = vec![
            ScoredPhrase::new("quick brown fox", 8.0),
            ScoredPhrase::new("fox", 1.5),
        ];
        let rendered = keyword_table(&keywords).to_string();
        assert!(rendered.contains("quick brown fox"));
        assert!(rendered.contains("8.00"));
        assert!(rendered.contains("1.50"));
        assert!(rendered.contains('2'));
    }

    #[test]
    fn word_table_shows_statistics() {
        let words = score_words(&["quick brown fox", "fox"]);
        let rendered = word_table(&words).to_string();
        assert!(rendered.contains("Degree"));
        assert!(rendered.contains("brown"));
        assert!(rendered.contains("2.00"));
    }

    #[test]
    fn json_shape() {
        let keywords = vec![ScoredPhrase::new("minimal set", 4.5)];
        let output = JsonExtractOutput {
            sources: vec![JsonSource {
                source: "-".into(),
                keywords: &keywords,
            }],
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["sources"][0]["source"], "-");
        assert_eq!(value["sources"][0]["keywords"][0]["phrase"], "minimal set");
        assert_eq!(value["sources"][0]["keywords"][0]["score"], 4.5);
    }

    #[test]
    fn json_highlighted_only_for_terminals() {
        let json = "{\n  \"phrase\": \"minimal set\"\n}";
        assert_eq!(render_json(json, false), json);

        let styled = render_json(json, true);
        assert!(styled.contains("\x1b["));
        assert!(styled.contains("minimal set"));
    }
}
