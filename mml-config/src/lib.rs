//! Shared configuration loader for the MML toolchain.
//!
//! `defaults/mml.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mml_parser::mml::style::Theme;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mml.default.toml");

/// Top-level configuration consumed by MML applications.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MmlConfig {
    pub completion: CompletionConfig,
    pub theme: Theme,
}

/// Mirrors the knobs exposed by tag completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CompletionConfig {
    pub case_sensitive: bool,
    pub lookbehind: usize,
}

/// Stacks configuration sources, lowest precedence first: embedded defaults, then files
/// in the order they were added, then explicit key overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only `mml.default.toml`, so building it yields the stock theme.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file the user named explicitly; [`Loader::build`] fails if it is absent.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        tracing::debug!(path = %path.as_ref().display(), "layering config file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a conventional location such as `./mml.toml` that may not exist.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force one dotted key, e.g. `theme.content.foreground` or `completion.lookbehind`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every source and deserialize. Bad colors or borders surface here as
    /// [`ConfigError`].
    pub fn build(self) -> Result<MmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in configuration with nothing layered on top.
pub fn load_defaults() -> Result<MmlConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mml_parser::mml::style::{Rgb, Style};
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.completion.case_sensitive);
        assert_eq!(config.completion.lookbehind, 250);
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("completion.case_sensitive", false)
            .expect("override to apply")
            .set_override("theme.content.foreground", "#000000")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.completion.case_sensitive);
        assert_eq!(config.theme.content, Style::plain(Rgb::new(0, 0, 0)));
        assert_eq!(config.theme.invalid, Theme::default().invalid);
    }

    #[test]
    fn layers_user_files() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[completion]\nlookbehind = 80\n\n[theme.escape]\nforeground = \"#123456\"")
            .expect("write config");

        let config = Loader::new().with_file(file.path()).build().expect("config to build");
        assert_eq!(config.completion.lookbehind, 80);
        assert!(config.completion.case_sensitive);
        assert_eq!(config.theme.escape, Style::plain(Rgb::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/mml.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/definitely/not/here/mml.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_malformed_colors() {
        let result = Loader::new()
            .set_override("theme.content.foreground", "white")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
