use lsp_types::CompletionItemKind;
use mml_parser::mml::vocabulary::{all_tags, TagGroup};
use once_cell::sync::Lazy;
use regex::Regex;

/// How far back from the cursor the trigger pattern is searched, in bytes.
pub const DEFAULT_LOOKBEHIND: usize = 250;

/// `<` followed by a possibly empty, partially typed tag name, right before the cursor.
static TAG_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([A-Za-z_][A-Za-z0-9_]*)?$").unwrap());

/// Describes a completion candidate that can be translated into protocol specific items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    pub label: String,
    pub detail: Option<String>,
    pub kind: CompletionItemKind,
    pub group: TagGroup,
}

impl CompletionCandidate {
    fn new(label: impl Into<String>, group: TagGroup) -> Self {
        let kind = match group {
            TagGroup::Color => CompletionItemKind::COLOR,
            TagGroup::Decoration | TagGroup::Tag => CompletionItemKind::KEYWORD,
        };
        Self {
            label: label.into(),
            detail: Some(group.describe().to_string()),
            kind,
            group,
        }
    }
}

/// Candidates plus the offset where an accepted label is spliced in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    /// Byte offset of the typed prefix in the queried text, one past the `<`. The host
    /// replaces `from..cursor` with the accepted label.
    pub from: usize,
    pub candidates: Vec<CompletionCandidate>,
}

impl CompletionResult {
    pub fn labels(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOptions {
    /// Match the typed prefix against names exactly (the default) or ignoring ASCII case.
    pub case_sensitive: bool,
    /// Bytes before the cursor considered when looking for `<`. Never crosses a line start.
    pub lookbehind: usize,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            lookbehind: DEFAULT_LOOKBEHIND,
        }
    }
}

/// Tag name completions for the text immediately before the cursor.
///
/// Returns `None` unless the cursor sits right after `<` or after `<` and a partial name.
/// Candidates keep the vocabulary order: colors, decorations, then other tags.
pub fn complete(text_before_cursor: &str) -> Option<CompletionResult> {
    complete_with(text_before_cursor, &CompletionOptions::default())
}

pub fn complete_with(
    text_before_cursor: &str,
    options: &CompletionOptions,
) -> Option<CompletionResult> {
    let text = text_before_cursor;
    let line_start = text.rfind('\n').map_or(0, |i| i + 1);
    let mut window_start = text.len().saturating_sub(options.lookbehind).max(line_start);
    while !text.is_char_boundary(window_start) {
        window_start += 1;
    }

    let captures = TAG_PREFIX.captures(&text[window_start..])?;
    let open = window_start + captures.get(0)?.start();
    if is_escaped(&text[line_start..open]) {
        return None;
    }

    let prefix = captures.get(1).map_or("", |m| m.as_str());
    let candidates: Vec<_> = all_tags()
        .filter(|(name, _)| matches_prefix(name, prefix, options.case_sensitive))
        .map(|(name, group)| CompletionCandidate::new(name, group))
        .collect();

    tracing::debug!(prefix, count = candidates.len(), "tag completion");

    Some(CompletionResult {
        from: open + 1,
        candidates,
    })
}

/// Completion at `offset` of a whole buffer. Offsets past the end or inside a character
/// are moved back to the nearest valid position.
pub fn complete_at(document: &str, offset: usize) -> Option<CompletionResult> {
    let mut offset = offset.min(document.len());
    while !document.is_char_boundary(offset) {
        offset -= 1;
    }
    complete(&document[..offset])
}

/// An odd run of backslashes right before the `<` escapes it.
fn is_escaped(before: &str) -> bool {
    before.bytes().rev().take_while(|b| *b == b'\\').count() % 2 == 1
}

fn matches_prefix(name: &str, prefix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        name.starts_with(prefix)
    } else {
        name.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mml_parser::mml::vocabulary::{COLOR_NAMES, DECORATION_NAMES, TAG_NAMES};
    use rstest::rstest;

    #[test]
    fn bare_open_offers_everything_in_order() {
        let result = complete("Hello <").unwrap();
        assert_eq!(result.from, 7);

        let expected: Vec<&str> = COLOR_NAMES
            .iter()
            .chain(DECORATION_NAMES)
            .chain(TAG_NAMES)
            .copied()
            .collect();
        assert_eq!(result.labels(), expected);
        assert_eq!(result.candidates[0].kind, CompletionItemKind::COLOR);
        assert_eq!(result.candidates[0].detail.as_deref(), Some("color"));
    }

    #[test]
    fn prefix_filters_and_keeps_order() {
        let result = complete("<gr").unwrap();
        assert_eq!(result.from, 1);
        assert_eq!(result.labels(), vec!["gray", "green", "grey", "gradient"]);
        assert!(!result.labels().contains(&"gold"));
    }

    #[test]
    fn prefix_is_case_sensitive_by_default() {
        assert!(complete("<GR").unwrap().candidates.is_empty());

        let options = CompletionOptions {
            case_sensitive: false,
            ..CompletionOptions::default()
        };
        let result = complete_with("<GR", &options).unwrap();
        assert_eq!(result.labels(), vec!["gray", "green", "grey", "gradient"]);
    }

    #[test]
    fn from_points_after_the_last_open_bracket() {
        let result = complete("<red>Hi</red> <b").unwrap();
        assert_eq!(result.from, 15);
        assert_eq!(result.labels(), vec!["black", "blue", "bold", "b"]);
    }

    #[rstest]
    #[case::plain_text("Hello")]
    #[case::closed_tag("<red>")]
    #[case::after_space("<red ")]
    #[case::closing_tag("</re")]
    #[case::argument("<click:")]
    #[case::digit_start("<1")]
    #[case::escaped(r"\<re")]
    #[case::escaped_after_text(r"say \<")]
    #[case::empty("")]
    fn no_completion(#[case] text: &str) {
        assert_eq!(complete(text), None);
    }

    #[test]
    fn escaped_backslash_does_not_escape_bracket() {
        let result = complete(r"\\<bo").unwrap();
        assert_eq!(result.from, 3);
        assert_eq!(result.labels(), vec!["bold"]);
    }

    #[test]
    fn only_the_current_line_counts() {
        assert_eq!(complete("<gr\n"), None);
        assert_eq!(complete("<gr\nfoo"), None);
        let result = complete("first\n<un").unwrap();
        assert_eq!(result.from, 7);
        assert_eq!(result.labels(), vec!["underlined"]);
    }

    #[test]
    fn lookbehind_limits_the_search() {
        let options = CompletionOptions {
            lookbehind: 4,
            ..CompletionOptions::default()
        };
        assert!(complete_with("<gra", &options).is_some());
        assert_eq!(complete_with("<grad", &options), None);
    }

    #[test]
    fn lookbehind_respects_char_boundaries() {
        let options = CompletionOptions {
            lookbehind: 3,
            ..CompletionOptions::default()
        };
        assert_eq!(complete_with("é<b", &options).unwrap().from, 3);
    }

    #[test]
    fn complete_at_uses_text_before_offset() {
        let document = "<gradient:red:blue>text</gra";
        let result = complete_at("<ho and more", 3).unwrap();
        assert_eq!(result.labels(), vec!["hover"]);
        assert_eq!(complete_at(document, document.len()), None);
        assert_eq!(complete_at(document, 1).unwrap().from, 1);
        assert!(complete_at("<é", 2).is_some());
    }
}
