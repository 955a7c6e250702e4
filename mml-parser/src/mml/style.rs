//! Style mapping
//!
//!     A total, declarative table from token category to visual style. The renderer of a
//!     host looks styles up by category; nothing here is computed from the text.
//!
//!     Markup (brackets, names, arguments) is drawn in a single faded accent color so the
//!     text being authored stays readable. Escapes get their own color and invalid spans are
//!     underlined.
//!
//!     A [Theme] holds one style per category and can be deserialized, which is how the
//!     configuration crate lets users override individual entries.

use crate::mml::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors from parsing the textual form of colors and borders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    InvalidColor(String),
    InvalidBorder(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::InvalidColor(value) => {
                write!(f, "Invalid color '{}': expected #rrggbb", value)
            }
            StyleError::InvalidBorder(value) => write!(
                f,
                "Invalid border '{}': expected '<width>px <solid|dotted|dashed|wavy> #rrggbb'",
                value
            ),
        }
    }
}

impl std::error::Error for StyleError {}

/// An sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidColor(value.to_string());
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
    Wavy,
}

impl LineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dotted => "dotted",
            LineStyle::Dashed => "dashed",
            LineStyle::Wavy => "wavy",
        }
    }
}

/// An underline drawn below the span, written CSS style: `1px dotted #f44747`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Border {
    pub width_px: u8,
    pub line: LineStyle,
    pub color: Rgb,
}

impl FromStr for Border {
    type Err = StyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidBorder(value.to_string());
        let mut parts = value.split_whitespace();
        let (Some(width), Some(line), Some(color), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let width_px = width
            .strip_suffix("px")
            .and_then(|w| w.parse().ok())
            .ok_or_else(invalid)?;
        let line = match line {
            "solid" => LineStyle::Solid,
            "dotted" => LineStyle::Dotted,
            "dashed" => LineStyle::Dashed,
            "wavy" => LineStyle::Wavy,
            _ => return Err(invalid()),
        };
        let color = color.parse().map_err(|_| invalid())?;
        Ok(Border {
            width_px,
            line,
            color,
        })
    }
}

impl TryFrom<String> for Border {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Border> for String {
    fn from(border: Border) -> Self {
        border.to_string()
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {} {}", self.width_px, self.line.as_str(), self.color)
    }
}

/// Visual style of one token category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub foreground: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
}

impl Style {
    pub const fn plain(foreground: Rgb) -> Self {
        Self {
            foreground,
            opacity: None,
            border: None,
        }
    }
}

const TAG_COLOR: Rgb = Rgb::new(0x29, 0xbe, 0xff);
const TAG_OPACITY: f32 = 0.4;
const CONTENT_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);
const ESCAPE_COLOR: Rgb = Rgb::new(0xe4, 0x76, 0x29);
const INVALID_COLOR: Rgb = Rgb::new(0xef, 0x46, 0x46);
const INVALID_UNDERLINE: Border = Border {
    width_px: 1,
    line: LineStyle::Dotted,
    color: Rgb::new(0xf4, 0x47, 0x47),
};

/// The built-in style of a category.
pub const fn style_for(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Bracket
        | TokenKind::TagName
        | TokenKind::Color
        | TokenKind::PropertyName
        | TokenKind::String
        | TokenKind::Number
        | TokenKind::Separator => Style {
            foreground: TAG_COLOR,
            opacity: Some(TAG_OPACITY),
            border: None,
        },
        TokenKind::Content => Style::plain(CONTENT_COLOR),
        TokenKind::Escape => Style::plain(ESCAPE_COLOR),
        TokenKind::Invalid => Style {
            foreground: INVALID_COLOR,
            opacity: None,
            border: Some(INVALID_UNDERLINE),
        },
    }
}

/// One style per category. Entries missing from a deserialized theme take the built-in
/// style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub escape: Style,
    pub bracket: Style,
    pub tag_name: Style,
    pub color: Style,
    pub separator: Style,
    pub string: Style,
    pub number: Style,
    pub property_name: Style,
    pub content: Style,
    pub invalid: Style,
}

impl Theme {
    pub fn style(&self, kind: TokenKind) -> &Style {
        match kind {
            TokenKind::Escape => &self.escape,
            TokenKind::Bracket => &self.bracket,
            TokenKind::TagName => &self.tag_name,
            TokenKind::Color => &self.color,
            TokenKind::Separator => &self.separator,
            TokenKind::String => &self.string,
            TokenKind::Number => &self.number,
            TokenKind::PropertyName => &self.property_name,
            TokenKind::Content => &self.content,
            TokenKind::Invalid => &self.invalid,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            escape: style_for(TokenKind::Escape),
            bracket: style_for(TokenKind::Bracket),
            tag_name: style_for(TokenKind::TagName),
            color: style_for(TokenKind::Color),
            separator: style_for(TokenKind::Separator),
            string: style_for(TokenKind::String),
            number: style_for(TokenKind::Number),
            property_name: style_for(TokenKind::PropertyName),
            content: style_for(TokenKind::Content),
            invalid: style_for(TokenKind::Invalid),
        }
    }
}
