//! Syntax highlighting and terminal styling for rake.
//!
//! Configuration is shown as highlighted TOML. JSON keyword dumps are highlighted
//! when they go to a terminal. The free functions wrap text in ANSI styles for
//! headers and warnings, and for the stopword/phrase markup used by `rake inspect`.

#![warn(missing_docs)]

use std::ops::Range;

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Languages rake knows how to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// TOML configuration.
    Toml,
    /// JSON output.
    Json,
}

impl Syntax {
    /// File extension syntect indexes this syntax under.
    fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// A syntax highlighter producing 24-bit ANSI terminal output.
pub struct Highlighter {
    /// Syntax definitions, including TOML from the two-face extras.
    syntax_set: SyntaxSet,
    /// Lazily decoded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, Syntax::Toml)
    }

    /// Highlights JSON content.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, Syntax::Json)
    }

    /// Highlights content with the given syntax.
    ///
    /// Lines the highlighter chokes on are passed through unstyled. The output always
    /// ends with a reset sequence.
    pub fn highlight(&self, content: &str, syntax: Syntax) -> String {
        let theme = self.theme_set.get(self.theme);
        let mut lines = HighlightLines::new(self.syntax(syntax), theme);

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }

    /// Looks up a syntax definition, falling back to plain text.
    fn syntax(&self, syntax: Syntax) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension(syntax.extension())
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan.
    pub const CYAN: &str = "\x1b[36m";
    /// Green.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in the given escape sequences followed by a reset.
fn styled(codes: &[&str], text: &str) -> String {
    let mut out = codes.concat();
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Formats a section header (bold cyan).
pub fn header(text: &str) -> String {
    styled(&[colors::BOLD, colors::CYAN], text)
}

/// Formats a subheader (bold).
pub fn subheader(text: &str) -> String {
    styled(&[colors::BOLD], text)
}

/// Formats secondary text (dim).
pub fn dim(text: &str) -> String {
    styled(&[colors::DIM], text)
}

/// Formats a warning (yellow).
pub fn warning(text: &str) -> String {
    styled(&[colors::YELLOW], text)
}

/// Formats a candidate phrase (bold green).
pub fn phrase(text: &str) -> String {
    styled(&[colors::BOLD, colors::GREEN], text)
}

/// Indents every line of `content` by two spaces.
pub fn indent_content(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a sentence with stopword spans dimmed and the text between them as phrases.
///
/// `spans` must be ordered, non-overlapping byte ranges on char boundaries of `text`.
/// Whitespace around the phrase text is kept unstyled.
pub fn mark_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut cursor = 0;
    for span in spans {
        push_phrase_segment(&mut out, &text[cursor..span.start]);
        out.push_str(&dim(&text[span.clone()]));
        cursor = span.end;
    }
    push_phrase_segment(&mut out, &text[cursor..]);
    out
}

/// Appends a segment between stopwords, styling only its non-blank core.
fn push_phrase_segment(out: &mut String, segment: &str) {
    let core = segment.trim();
    if core.is_empty() {
        out.push_str(segment);
        return;
    }
    let lead = segment.len() - segment.trim_start().len();
    out.push_str(&segment[..lead]);
    out.push_str(&phrase(core));
    out.push_str(&segment[lead + core.len()..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_toml() {
        let hl = Highlighter::new();
        let output = hl.highlight_toml("[extract]\nlimit = 20\n");
        assert!(output.contains("\x1b["));
        assert!(output.ends_with(colors::RESET));
        assert!(output.contains("limit"));
    }

    #[test]
    fn test_highlight_json() {
        let hl = Highlighter::new();
        let output = hl.highlight_json("{\"phrase\": \"minimal set\"}\n");
        assert!(output.contains("\x1b["));
        assert!(output.contains("minimal set"));
    }

    #[test]
    fn test_syntaxes_available() {
        let ss = extra_syntaxes();
        for syntax in [Syntax::Toml, Syntax::Json] {
            assert!(
                ss.find_syntax_by_extension(syntax.extension()).is_some(),
                "{syntax:?} syntax should be available"
            );
        }
    }

    #[test]
    fn test_header_formatting() {
        let h = header("Keywords");
        assert!(h.starts_with(colors::BOLD));
        assert!(h.contains(colors::CYAN));
        assert!(h.ends_with(colors::RESET));
        assert!(h.contains("Keywords"));
    }

    #[test]
    fn test_indent_content() {
        assert_eq!(indent_content("a\nb"), "  a\n  b");
        assert_eq!(indent_content(""), "");
    }

    #[test]
    fn test_mark_spans() {
        let text = "the quick fox is here";
        let marked = mark_spans(text, &[0..3, 14..16]);
        let expected = format!(
            "{} {} {} {}",
            dim("the"),
            phrase("quick fox"),
            dim("is"),
            phrase("here")
        );
        assert_eq!(marked, expected);
    }

    #[test]
    fn test_mark_spans_without_stopwords() {
        assert_eq!(mark_spans(" plain text ", &[]), format!(" {} ", phrase("plain text")));
    }

    #[test]
    fn test_mark_spans_adjacent_stopwords() {
        let marked = mark_spans("of the", &[0..2, 3..6]);
        assert_eq!(marked, format!("{} {}", dim("of"), dim("the")));
    }
}
