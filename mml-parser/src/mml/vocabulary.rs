//! Tag vocabulary
//!
//!     The fixed name sets of the markup. The lexer uses the color names to tell color tags
//!     from other tags; completion offers the union of all three groups. Declaration order is
//!     significant: it is the order candidates are presented in.
//!
//!     Unknown names are never rejected. The lexer classifies any identifier as a tag name,
//!     so this list drives completion and coloring, not validation.

use serde::{Deserialize, Serialize};

/// Named colors, canonical names first followed by the legacy `grey` spellings.
pub const COLOR_NAMES: &[&str] = &[
    "black",
    "dark_blue",
    "dark_green",
    "dark_aqua",
    "dark_red",
    "dark_purple",
    "gold",
    "gray",
    "dark_gray",
    "blue",
    "green",
    "aqua",
    "red",
    "light_purple",
    "yellow",
    "white",
    "grey",
    "dark_grey",
];

/// Text decorations and their short aliases.
pub const DECORATION_NAMES: &[&str] = &[
    "bold",
    "b",
    "italic",
    "em",
    "i",
    "underlined",
    "u",
    "strikethrough",
    "st",
    "obfuscated",
    "obf",
];

/// Structural and interactive tags.
pub const TAG_NAMES: &[&str] = &[
    "reset",
    "click",
    "hover",
    "key",
    "lang",
    "tr",
    "translate",
    "insertion",
    "rainbow",
    "gradient",
    "transition",
    "font",
    "newline",
    "selector",
    "sel",
    "score",
    "nbt",
    "data",
    "pride",
    "shadow",
    "color",
    "colour",
    "c",
];

/// The vocabulary group a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagGroup {
    Color,
    Decoration,
    Tag,
}

impl TagGroup {
    pub fn names(self) -> &'static [&'static str] {
        match self {
            TagGroup::Color => COLOR_NAMES,
            TagGroup::Decoration => DECORATION_NAMES,
            TagGroup::Tag => TAG_NAMES,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            TagGroup::Color => "color",
            TagGroup::Decoration => "decoration",
            TagGroup::Tag => "tag",
        }
    }
}

/// Every known name with its group, colors ++ decorations ++ tags.
pub fn all_tags() -> impl Iterator<Item = (&'static str, TagGroup)> {
    [TagGroup::Color, TagGroup::Decoration, TagGroup::Tag]
        .into_iter()
        .flat_map(|group| group.names().iter().map(move |name| (*name, group)))
}

/// Group of a known name, compared case-insensitively.
pub fn lookup(name: &str) -> Option<TagGroup> {
    all_tags()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, group)| group)
}

/// Length in bytes of the longest color name that prefixes `rest`, ignoring ASCII case.
///
/// No word boundary is required after the name: `redstone` matches `red`.
pub fn match_color_name(rest: &str) -> Option<usize> {
    COLOR_NAMES
        .iter()
        .filter(|name| {
            rest.get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name))
        })
        .map(|name| name.len())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tags_preserves_declaration_order() {
        let names: Vec<_> = all_tags().map(|(name, _)| name).collect();
        assert_eq!(
            names.len(),
            COLOR_NAMES.len() + DECORATION_NAMES.len() + TAG_NAMES.len()
        );
        assert_eq!(names[0], "black");
        assert_eq!(names[COLOR_NAMES.len()], "bold");
        assert_eq!(names.last(), Some(&"c"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("RED"), Some(TagGroup::Color));
        assert_eq!(lookup("Bold"), Some(TagGroup::Decoration));
        assert_eq!(lookup("gradient"), Some(TagGroup::Tag));
        assert_eq!(lookup("sparkle"), None);
    }

    #[test]
    fn color_prefix_prefers_longest() {
        assert_eq!(match_color_name("dark_grey>"), Some(9));
        assert_eq!(match_color_name("dark_gray>"), Some(9));
        assert_eq!(match_color_name("GOLD"), Some(4));
        assert_eq!(match_color_name("redstone"), Some(3));
        assert_eq!(match_color_name("gradient"), None);
        assert_eq!(match_color_name("dark"), None);
    }

    #[test]
    fn color_prefix_does_not_split_multibyte_text() {
        assert_eq!(match_color_name("ré"), None);
        assert_eq!(match_color_name("é"), None);
    }
}
