//! Property-based tests for the line lexer
//!
//! These tests check the contract the host editor relies on: for any line and any start
//! state the tokens cover the line exactly, lexing terminates, results are deterministic
//! and opening a tag never inherits argument context.

use mml_parser::{classify, tokenize_document, tokenize_line, LexerState, TokenKind};
use proptest::prelude::*;

/// Lines biased towards markup characters so tags, arguments and escapes are common.
fn markup_line() -> impl Strategy<Value = String> {
    prop_oneof![
        r#"[<>/:'"\\a-z0-9#!_. é]{0,48}"#,
        "\\PC{0,48}",
    ]
}

fn any_state() -> impl Strategy<Value = LexerState> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(in_tag, tag_name_expected, in_argument)| LexerState {
            in_tag,
            tag_name_expected,
            in_argument,
        },
    )
}

proptest! {
    #[test]
    fn tokens_cover_the_line_exactly(line in markup_line(), start in any_state()) {
        let result = tokenize_line(&line, start);
        let mut pos = 0;
        for (_, range) in &result.tokens {
            prop_assert_eq!(range.start, pos);
            prop_assert!(range.end > range.start);
            prop_assert!(line.is_char_boundary(range.end));
            pos = range.end;
        }
        prop_assert_eq!(pos, line.len());

        let rebuilt: String = result.tokens.iter().map(|(_, r)| &line[r.clone()]).collect();
        prop_assert_eq!(rebuilt, line);
    }

    #[test]
    fn step_count_is_bounded_by_length(line in markup_line(), start in any_state()) {
        let result = tokenize_line(&line, start);
        prop_assert!(result.tokens.len() <= line.len());
    }

    #[test]
    fn lexing_is_deterministic(line in markup_line(), start in any_state()) {
        prop_assert_eq!(tokenize_line(&line, start), tokenize_line(&line, start));
    }

    #[test]
    fn opening_a_tag_starts_fresh(line in markup_line(), start in any_state()) {
        let mut state = start;
        let mut pos = 0;
        while let Some(step) = classify(&line[pos..], state) {
            if step.kind == TokenKind::Bracket && line[pos..].starts_with('<') {
                prop_assert_eq!(step.state, LexerState::start().open_tag());
            }
            // Reachable states never have argument context outside a tag.
            if start.in_tag || !start.in_argument {
                prop_assert!(!step.state.in_argument || step.state.in_tag);
            }
            state = step.state;
            pos += step.len;
        }
    }

    #[test]
    fn escaped_bracket_never_opens_a_tag(prefix in "[a-z ]{0,12}", rest in markup_line()) {
        let line = format!("{prefix}\\<{rest}");
        let result = tokenize_line(&line, LexerState::start());
        let escape = result
            .tokens
            .iter()
            .find(|(_, range)| range.start == prefix.len())
            .cloned();
        prop_assert_eq!(escape, Some((TokenKind::Escape, prefix.len()..prefix.len() + 2)));
    }

    #[test]
    fn document_matches_line_by_line(lines in prop::collection::vec(markup_line(), 0..6)) {
        let source = lines.join("\n");
        let mut state = LexerState::start();
        let mut expected = Vec::new();
        for line in source.split('\n') {
            let tokens = tokenize_line(line, state);
            state = tokens.end_state;
            expected.push(tokens);
        }
        prop_assert_eq!(tokenize_document(&source), expected);
    }
}
