//! Testing utilities
//!
//!     Token streams are easiest to review as text. [render_document] prints one line per
//!     source line, the tokens in the simple `kind("text")` form followed by the end state,
//!     which keeps snapshot assertions readable:
//!
//!     ```text
//!     bracket("<") tagName("hover") separator(":") propertyName("show_text") | {in_tag, in_argument}
//!     separator(":") string("'hi'") bracket(">") | {}
//!     ```

use crate::mml::lexing::{tokenize_document, tokenize_line, LexerState};
use crate::mml::token::TokenKind;
use std::fmt::Write;

/// Render every line of `source` with its tokens and end state.
pub fn render_document(source: &str) -> String {
    let mut out = String::new();
    for (line, tokens) in source.split('\n').zip(tokenize_document(source)) {
        let _ = writeln!(out, "{} | {}", tokens.display(line), tokens.end_state);
    }
    out
}

/// Categories of a single line lexed from the document start state.
pub fn kinds(line: &str) -> Vec<TokenKind> {
    tokenize_line(line, LexerState::start())
        .tokens
        .into_iter()
        .map(|(kind, _)| kind)
        .collect()
}
