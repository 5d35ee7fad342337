//! Cosmetic line-by-line highlighting for the preview surface. This is not a
//! shell parser — just the line-prefix and regex hints the preview colors by.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    Comment,
    Keyword,
    Plain,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanKind {
    Plain,
    String,
    Variable,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HighlightedLine {
    pub number: usize,
    pub kind: LineKind,
    pub spans: Vec<Span>,
}

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(if|for|while|function|case|echo|exit)\b").expect("keyword regex"))
}

fn span_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Double-quoted strings win over the variables inside them.
    RE.get_or_init(|| Regex::new(r#""[^"]*"|\$[A-Za-z0-9_]+"#).expect("span regex"))
}

fn classify_line(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Comment
    } else if keyword_re().is_match(line) {
        LineKind::Keyword
    } else {
        LineKind::Plain
    }
}

fn split_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for m in span_re().find_iter(line) {
        if m.start() > cursor {
            spans.push(Span {
                kind: SpanKind::Plain,
                text: line[cursor..m.start()].to_string(),
            });
        }
        let kind = if m.as_str().starts_with('"') {
            SpanKind::String
        } else {
            SpanKind::Variable
        };
        spans.push(Span {
            kind,
            text: m.as_str().to_string(),
        });
        cursor = m.end();
    }

    if cursor < line.len() {
        spans.push(Span {
            kind: SpanKind::Plain,
            text: line[cursor..].to_string(),
        });
    }
    spans
}

/// Splits a script into numbered, classified lines for display. Pure — the
/// concatenated span texts always reproduce the input line.
pub fn highlight(script: &str) -> Vec<HighlightedLine> {
    script
        .split('\n')
        .enumerate()
        .map(|(i, line)| HighlightedLine {
            number: i + 1,
            kind: classify_line(line),
            spans: split_spans(line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(lines: &[HighlightedLine]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn comments_and_keywords_are_classified() {
        let lines = highlight("# a comment\necho hi\nuseradd -m bob");
        assert_eq!(lines[0].kind, LineKind::Comment);
        assert_eq!(lines[1].kind, LineKind::Keyword);
        assert_eq!(lines[2].kind, LineKind::Plain);
    }

    #[test]
    fn keyword_must_be_a_word_prefix() {
        let lines = highlight("echoing");
        assert_eq!(lines[0].kind, LineKind::Plain);
    }

    #[test]
    fn strings_and_variables_become_spans() {
        let lines = highlight("echo \"hello $USER\" $HOME done");
        let spans = &lines[0].spans;
        assert!(spans
            .iter()
            .any(|s| s.kind == SpanKind::String && s.text == "\"hello $USER\""));
        assert!(spans
            .iter()
            .any(|s| s.kind == SpanKind::Variable && s.text == "$HOME"));
    }

    #[test]
    fn variables_inside_strings_stay_in_the_string_span() {
        let lines = highlight("\"a $VAR b\"");
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].kind, SpanKind::String);
    }

    #[test]
    fn spans_reassemble_to_the_original_text() {
        let script = "#!/bin/bash\n\necho \"x\" $Y\nif [ -d \"$D\" ]; then\nfi";
        assert_eq!(rejoin(&highlight(script)), script);
    }

    #[test]
    fn line_numbers_start_at_one() {
        let lines = highlight("a\nb");
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[1].number, 2);
    }

    #[test]
    fn highlight_is_idempotent_over_its_input() {
        let script = "echo hi\n";
        assert_eq!(highlight(script), highlight(script));
    }
}
