//! Token taxonomy
//!
//!     Every byte of a line is covered by exactly one token, and every token carries one of
//!     the ten categories below. The set is closed: the style table, the CLI and the
//!     highlighting layer all match on it exhaustively.
//!
//!     The string names are the highlight tags host editors already know, so they are
//!     used verbatim for serialization and the simple text rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Category of a classified span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Escape,
    Bracket,
    TagName,
    Color,
    Separator,
    String,
    Number,
    PropertyName,
    Content,
    Invalid,
}

/// A classified span of a line: byte range relative to the start of the line.
pub type Token = (TokenKind, Range<usize>);

impl TokenKind {
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Escape,
        TokenKind::Bracket,
        TokenKind::TagName,
        TokenKind::Color,
        TokenKind::Separator,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::PropertyName,
        TokenKind::Content,
        TokenKind::Invalid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Escape => "escape",
            TokenKind::Bracket => "bracket",
            TokenKind::TagName => "tagName",
            TokenKind::Color => "color",
            TokenKind::Separator => "separator",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::PropertyName => "propertyName",
            TokenKind::Content => "content",
            TokenKind::Invalid => "invalid",
        }
    }

    /// True for categories that belong to tag markup rather than the rendered text.
    pub fn is_markup(self) -> bool {
        !matches!(
            self,
            TokenKind::Content | TokenKind::Escape | TokenKind::Invalid
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_serde_representation() {
        for kind in TokenKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn markup_categories() {
        assert!(TokenKind::Bracket.is_markup());
        assert!(TokenKind::PropertyName.is_markup());
        assert!(!TokenKind::Content.is_markup());
        assert!(!TokenKind::Escape.is_markup());
        assert!(!TokenKind::Invalid.is_markup());
    }
}
