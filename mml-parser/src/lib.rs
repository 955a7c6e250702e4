//! # mml
//!
//! An incremental lexer for MML, the inline tag markup used to author in-game text
//! (`<red>Hello</red> <click:run_command:'/spawn'>here</click>`).
//!
//! The lexer is invoked one line at a time by a host editor. Each call receives the
//! continuation state left by the previous line and returns the classified spans of the
//! line together with the state to feed into the next one. Nothing here ever fails:
//! malformed markup is classified as `invalid` and tokenizing carries on.
//!
//! File Layout
//!
//!     src/mml
//!       ├── lexing        Lexer state, the classifier and the line/document drivers
//!       ├── token         The closed token taxonomy
//!       ├── vocabulary    Static tag name sets shared by lexing and completion
//!       ├── style         Category to visual style table and themes
//!       └── testing       Helpers for rendering token streams in tests

pub mod mml;

pub use mml::lexing::{classify, tokenize_document, tokenize_line, LexerState, LineTokens, Step};
pub use mml::token::TokenKind;
