//! Token classifier
//!
//!     One step of the lexer: look at the unlexed rest of a line, decide what the next span
//!     is, how long it is and what state follows. Rules are tried top to bottom and the
//!     first match wins:
//!
//!         1. Escape: `\\`, `\<`, a backslash before a regex metacharacter, or a bare `\`.
//!         2. `<` opens a tag.
//!         3. `>` closes the open tag.
//!         4. Inside a tag:
//!             a. `/` (closing-tag marker) is a tag name span.
//!             b. In the name slot: `reset`, `!name`, a color name, `#RRGGBB[AA]`, any
//!                identifier. After `/` every name is a tag name, colors included.
//!             c. `:` enters the argument list.
//!             d. In an argument: quoted string, unsigned decimal, or a property run.
//!             e. Anything else is one `invalid` character.
//!         5. Outside a tag: a run of text up to the next `<` or `\`.
//!
//!     Rules 1, 2 and 5 never compete (they start on different characters), so they are a
//!     plain logos lexer. The tag interior is priority ordered rather than longest match
//!     (`12px` is a number followed by a property, not one property), so it is written as
//!     anchored regexes tried in order.

use crate::mml::lexing::state::LexerState;
use crate::mml::token::TokenKind;
use crate::mml::vocabulary::match_color_name;
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

/// Result of one classification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: TokenKind,
    /// Bytes consumed. Never zero, always ends on a char boundary.
    pub len: usize,
    pub state: LexerState,
}

impl Step {
    fn new(kind: TokenKind, len: usize, state: LexerState) -> Self {
        Self { kind, len, state }
    }
}

/// Tokens that can appear outside tag interiors.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    #[regex(r"\\[<.*+?^${}()|\[\]\\]?")]
    Escape,

    #[token("<")]
    Open,

    #[regex(r"[^<\\]+")]
    Text,
}

static RESET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i:reset)\b").unwrap());
static NEGATED_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^![A-Za-z_][A-Za-z0-9_]*").unwrap());
static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6})").unwrap());
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap());
static STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*")"#).unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?").unwrap());
static PROPERTY: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[^:<>"'\\]+"#).unwrap());

/// Classify the span at the start of `rest`.
///
/// Returns `None` only when `rest` is empty. The returned state is a new value; `state`
/// itself is never modified.
pub fn classify(rest: &str, state: LexerState) -> Option<Step> {
    let first = rest.chars().next()?;
    let step = if !state.in_tag || first == '\\' || first == '<' {
        classify_surface(rest, state)
    } else {
        classify_tag(rest, state)
    };
    Some(step)
}

fn classify_surface(rest: &str, state: LexerState) -> Step {
    let mut lexer = Surface::lexer(rest);
    match lexer.next() {
        Some(Ok(Surface::Escape)) => Step::new(TokenKind::Escape, lexer.span().len(), state),
        Some(Ok(Surface::Open)) => Step::new(TokenKind::Bracket, 1, state.open_tag()),
        Some(Ok(Surface::Text)) => Step::new(TokenKind::Content, lexer.span().len(), state),
        _ => Step::new(TokenKind::Content, first_char_len(rest), state),
    }
}

fn classify_tag(rest: &str, state: LexerState) -> Step {
    if rest.starts_with('>') {
        return Step::new(TokenKind::Bracket, 1, state.close_tag());
    }
    if rest.starts_with('/') {
        let state = if state.tag_name_expected {
            state.closing_name()
        } else {
            state
        };
        return Step::new(TokenKind::TagName, 1, state);
    }

    let mut state = state;
    if state.tag_name_expected {
        let closing = state.is_closing_name();
        state = state.name_consumed();
        if let Some((kind, len)) = match_tag_name(rest) {
            // `</red>` closes a tag named red; only opening tags carry a color.
            let kind = if closing { TokenKind::TagName } else { kind };
            return Step::new(kind, len, state);
        }
    }

    if rest.starts_with(':') {
        return Step::new(TokenKind::Separator, 1, state.enter_argument());
    }

    if state.in_argument {
        if let Some(len) = match_len(&STRING, rest) {
            return Step::new(TokenKind::String, len, state);
        }
        if let Some(len) = match_len(&NUMBER, rest) {
            return Step::new(TokenKind::Number, len, state);
        }
        if let Some(len) = match_len(&PROPERTY, rest) {
            return Step::new(TokenKind::PropertyName, len, state);
        }
    }

    Step::new(TokenKind::Invalid, first_char_len(rest), state)
}

fn match_tag_name(rest: &str) -> Option<(TokenKind, usize)> {
    if let Some(len) = match_len(&RESET, rest) {
        return Some((TokenKind::TagName, len));
    }
    if let Some(len) = match_len(&NEGATED_NAME, rest) {
        return Some((TokenKind::TagName, len));
    }
    if let Some(len) = match_color_name(rest) {
        return Some((TokenKind::Color, len));
    }
    if let Some(len) = match_len(&HEX_COLOR, rest) {
        return Some((TokenKind::Color, len));
    }
    match_len(&IDENTIFIER, rest).map(|len| (TokenKind::TagName, len))
}

fn match_len(pattern: &Regex, rest: &str) -> Option<usize> {
    pattern
        .find(rest)
        .map(|m| m.end())
        .filter(|len| *len > 0)
}

fn first_char_len(rest: &str) -> usize {
    rest.chars().next().map_or(1, char::len_utf8)
}
