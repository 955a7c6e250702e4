//! Continuation state carried from the end of one line to the start of the next.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexer position relative to tag markup.
///
/// The state holds no buffer position, so it can be copied, stored per line and used to
/// restart lexing at the beginning of any line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LexerState {
    /// Between an unmatched `<` and its `>`.
    pub in_tag: bool,
    /// Right after `<` (or `</`), before any name characters were consumed.
    pub tag_name_expected: bool,
    /// After a `:` separator inside the current tag.
    pub in_argument: bool,
}

impl LexerState {
    /// The state at the start of a document.
    pub const fn start() -> Self {
        Self {
            in_tag: false,
            tag_name_expected: true,
            in_argument: false,
        }
    }

    /// `<` consumed. Argument context of an earlier, unterminated tag is dropped.
    pub const fn open_tag(self) -> Self {
        Self {
            in_tag: true,
            tag_name_expected: true,
            in_argument: false,
        }
    }

    /// `>` consumed.
    pub const fn close_tag(self) -> Self {
        Self {
            in_tag: false,
            in_argument: false,
            ..self
        }
    }

    /// `:` consumed inside a tag.
    pub const fn enter_argument(self) -> Self {
        Self {
            in_argument: true,
            ..self
        }
    }

    /// `/` consumed in the name slot, so the name that follows closes a tag.
    ///
    /// Encoded as the name slot with `in_argument` set. Opening a tag always clears
    /// `in_argument`, so this combination means nothing else.
    pub const fn closing_name(self) -> Self {
        Self {
            in_tag: true,
            tag_name_expected: true,
            in_argument: true,
        }
    }

    pub const fn is_closing_name(self) -> bool {
        self.in_tag && self.tag_name_expected && self.in_argument
    }

    /// The name slot of the current tag has been used up.
    pub const fn name_consumed(self) -> Self {
        Self {
            tag_name_expected: false,
            in_argument: self.in_argument && !self.is_closing_name(),
            ..self
        }
    }
}

impl Default for LexerState {
    fn default() -> Self {
        Self::start()
    }
}

/// Lists the set flags, e.g. `{in_tag, in_argument}`.
impl fmt::Display for LexerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.in_tag, "in_tag"),
            (self.tag_name_expected, "tag_name_expected"),
            (self.in_argument, "in_argument"),
        ];
        let set: Vec<&str> = flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{{{}}}", set.join(", "))
    }
}
