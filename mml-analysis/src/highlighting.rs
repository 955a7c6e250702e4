//! Styled spans for a whole buffer.
//!
//! Lines are lexed in order with each line's end state feeding the next, the way a host
//! would after a full reload. Ranges are absolute byte offsets into the source.

use mml_parser::mml::style::{Style, Theme};
use mml_parser::{tokenize_document, TokenKind};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightSpan {
    /// Zero-based line index.
    pub line: usize,
    pub range: Range<usize>,
    pub kind: TokenKind,
    pub style: Style,
}

pub fn highlight(source: &str, theme: &Theme) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut line_start = 0;

    for ((index, line), tokens) in source.split('\n').enumerate().zip(tokenize_document(source)) {
        spans.extend(tokens.tokens.into_iter().map(|(kind, range)| HighlightSpan {
            line: index,
            range: line_start + range.start..line_start + range.end,
            kind,
            style: *theme.style(kind),
        }));
        line_start += line.len() + 1;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use mml_parser::mml::style::{style_for, Rgb};

    #[test]
    fn spans_use_absolute_offsets() {
        let source = "<b>x\n\n<red";
        let spans = highlight(source, &Theme::default());
        let summary: Vec<_> = spans
            .iter()
            .map(|s| (s.line, s.kind, &source[s.range.clone()]))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, TokenKind::Bracket, "<"),
                (0, TokenKind::TagName, "b"),
                (0, TokenKind::Bracket, ">"),
                (0, TokenKind::Content, "x"),
                (2, TokenKind::Bracket, "<"),
                (2, TokenKind::Color, "red"),
            ]
        );
    }

    #[test]
    fn styles_come_from_the_theme() {
        let theme = Theme {
            content: Style::plain(Rgb::new(1, 2, 3)),
            ..Theme::default()
        };
        let spans = highlight("hi<u>", &theme);
        assert_eq!(spans[0].style, Style::plain(Rgb::new(1, 2, 3)));
        assert_eq!(spans[1].style, style_for(TokenKind::Bracket));
    }

    #[test]
    fn empty_source_has_no_spans() {
        assert!(highlight("", &Theme::default()).is_empty());
    }
}
