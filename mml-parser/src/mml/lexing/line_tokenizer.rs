//! Line and document drivers
//!
//!     [tokenize_line] is the entry point a host editor calls for every line it needs to
//!     highlight. It owns the continuity contract: the returned `end_state` is what the next
//!     line must be started with. Comparing a freshly computed end state with the stored one
//!     is how a host learns whether lines below an edit need lexing again; that decision is
//!     left to the host.

use crate::mml::lexing::classifier::classify;
use crate::mml::lexing::state::LexerState;
use crate::mml::token::{Token, TokenKind};
use std::fmt;

/// Tokens of one line plus the state the line ends in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens {
    /// Ordered, gapless spans covering the whole line. Offsets are relative to the line.
    pub tokens: Vec<Token>,
    pub end_state: LexerState,
}

impl LineTokens {
    /// Source text of the `index`th token.
    pub fn text_of<'a>(&self, line: &'a str, index: usize) -> Option<&'a str> {
        self.tokens
            .get(index)
            .and_then(|(_, range)| line.get(range.clone()))
    }

    /// `(kind, text)` pairs, mostly useful for assertions and debugging output.
    pub fn pairs<'s, 'a: 's>(
        &'s self,
        line: &'a str,
    ) -> impl Iterator<Item = (TokenKind, &'a str)> + 's {
        self.tokens
            .iter()
            .map(move |(kind, range)| (*kind, &line[range.clone()]))
    }

    /// Render as `kind("text") kind("text") ...`.
    pub fn display<'a>(&'a self, line: &'a str) -> SimpleDisplay<'a> {
        SimpleDisplay { line, tokens: self }
    }
}

/// The simple text rendering of a tokenized line. See [LineTokens::display].
pub struct SimpleDisplay<'a> {
    line: &'a str,
    tokens: &'a LineTokens,
}

impl fmt::Display for SimpleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (kind, text)) in self.tokens.pairs(self.line).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}({:?})", kind, text)?;
        }
        Ok(())
    }
}

/// Tokenize a single line starting from `start`.
///
/// Terminates in at most `line.len()` classification steps, since every step consumes at
/// least one byte.
pub fn tokenize_line(line: &str, start: LexerState) -> LineTokens {
    let mut tokens = Vec::new();
    let mut state = start;
    let mut pos = 0;

    while let Some(step) = classify(&line[pos..], state) {
        let end = pos + step.len;
        tokens.push((step.kind, pos..end));
        state = step.state;
        pos = end;
    }

    tracing::trace!(
        len = line.len(),
        tokens = tokens.len(),
        ?start,
        end = ?state,
        "tokenized line"
    );

    LineTokens {
        tokens,
        end_state: state,
    }
}

/// Tokenize a whole buffer, threading each line's end state into the next line.
///
/// Lines are split on `\n`; a trailing `\r` stays part of its line's text. The result has
/// one entry per line, including a final empty line after a trailing newline.
pub fn tokenize_document(source: &str) -> Vec<LineTokens> {
    let mut state = LexerState::start();
    source
        .split('\n')
        .map(|line| {
            let tokens = tokenize_line(line, state);
            state = tokens.end_state;
            tokens
        })
        .collect()
}
