//! Lexer
//!
//!     MML is tokenized line by line. A host editor hands every line to [tokenize_line]
//!     together with the state the previous line ended in, and stores the returned end state
//!     for the next line. The state is a small `Copy` value, so the host can keep one per
//!     line and restart lexing from any line after an edit.
//!
//! The Pieces
//!
//!     1. [LexerState](state::LexerState): the three flags carried across line boundaries.
//!     2. [classify](classifier::classify): one classification step. Given the unlexed rest
//!        of the line and a state, it returns the category of the next span, its length and
//!        the new state. It always consumes at least one character.
//!     3. [tokenize_line](line_tokenizer::tokenize_line): drives the classifier over a line
//!        until it is exhausted. [tokenize_document](line_tokenizer::tokenize_document)
//!        does the same for a whole buffer, threading states from line to line.
//!
//! Error Recovery
//!
//!     There is no error type. Characters inside a tag that fit no rule become one-character
//!     `invalid` spans and lexing resumes at the next character, so an editor can render any
//!     document, including half-typed markup.

pub mod classifier;
pub mod line_tokenizer;
pub mod state;

pub use classifier::{classify, Step};
pub use line_tokenizer::{tokenize_document, tokenize_line, LineTokens};
pub use state::LexerState;
