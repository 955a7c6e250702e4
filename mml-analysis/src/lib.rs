//! Editor-facing analysis for MML
//!
//!     Features a host editor wires into its UI, built on the line lexer of `mml-parser`:
//!
//!         - [completion]: tag name suggestions while typing after `<`.
//!         - [highlighting]: styled spans for a whole buffer.
//!
//!     Both are synchronous and allocation-light so they can run on every keystroke. They
//!     share the static vocabulary of the parser crate but no runtime state.

pub mod completion;
pub mod highlighting;

pub use completion::{
    complete, complete_at, complete_with, CompletionCandidate, CompletionOptions,
    CompletionResult,
};
pub use highlighting::{highlight, HighlightSpan};
