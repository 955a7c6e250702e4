//! Subcommand handlers

use crate::error::CliError;
use crossterm::style::{Attribute, Color, ContentStyle};
use mml_analysis::{complete_with, highlight, CompletionOptions};
use mml_config::{CompletionConfig, MmlConfig};
use mml_parser::mml::style::{LineStyle, Rgb, Style};
use mml_parser::{tokenize_document, LexerState, TokenKind};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct LineDump<'a> {
    line: usize,
    tokens: Vec<TokenDump<'a>>,
    end_state: LexerState,
}

#[derive(Serialize)]
struct TokenDump<'a> {
    kind: TokenKind,
    start: usize,
    end: usize,
    text: &'a str,
}

pub fn completion_options(config: &MmlConfig) -> CompletionOptions {
    let CompletionConfig {
        case_sensitive,
        lookbehind,
    } = config.completion;
    CompletionOptions {
        case_sensitive,
        lookbehind,
    }
}

fn read_source(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })
}

/// Handle the tokens command
pub fn handle_tokens_command(path: &str, format: &str) -> Result<(), CliError> {
    let source = read_source(path)?;
    let lines: Vec<&str> = source.split('\n').collect();
    let tokenized = tokenize_document(&source);
    tracing::debug!(path, lines = lines.len(), "tokenized document");

    let formatted = match format {
        "json" => {
            let dump: Vec<LineDump> = lines
                .iter()
                .zip(&tokenized)
                .enumerate()
                .map(|(index, (line, tokens))| LineDump {
                    line: index + 1,
                    tokens: tokens
                        .tokens
                        .iter()
                        .map(|(kind, range)| TokenDump {
                            kind: *kind,
                            start: range.start,
                            end: range.end,
                            text: &line[range.clone()],
                        })
                        .collect(),
                    end_state: tokens.end_state,
                })
                .collect();
            serde_json::to_string_pretty(&dump)? + "\n"
        }
        _ => lines
            .iter()
            .zip(&tokenized)
            .enumerate()
            .map(|(index, (line, tokens))| {
                format!("{}: {} | {}\n", index + 1, tokens.display(line), tokens.end_state)
            })
            .collect(),
    };

    print!("{}", formatted);
    Ok(())
}

/// Handle the highlight command
pub fn handle_highlight_command(path: &str, config: &MmlConfig) -> Result<(), CliError> {
    let source = read_source(path)?;
    let mut out = String::with_capacity(source.len() * 2);
    let mut last_line = 0;

    for span in highlight(&source, &config.theme) {
        while last_line < span.line {
            out.push('\n');
            last_line += 1;
        }
        let text = &source[span.range.clone()];
        out.push_str(&terminal_style(&span.style).apply(text).to_string());
    }
    let line_count = source.lines().count();
    while last_line + 1 < line_count {
        out.push('\n');
        last_line += 1;
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", out).map_err(|source| CliError::Io {
        path: "<stdout>".to_string(),
        source,
    })
}

/// Handle the complete command
pub fn handle_complete_command(text: &str, options: &CompletionOptions) {
    let Some(result) = complete_with(text, options) else {
        tracing::debug!("cursor is not in a tag name");
        return;
    };
    for candidate in &result.candidates {
        match &candidate.detail {
            Some(detail) => println!("{}\t{}", candidate.label, detail),
            None => println!("{}", candidate.label),
        }
    }
}

fn terminal_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Terminals have no opacity, faded styles are drawn dim instead.
fn terminal_style(style: &Style) -> ContentStyle {
    let mut terminal = ContentStyle::new();
    terminal.foreground_color = Some(terminal_color(style.foreground));
    if style.opacity.is_some_and(|opacity| opacity < 1.0) {
        terminal.attributes.set(Attribute::Dim);
    }
    if let Some(border) = style.border {
        terminal.underline_color = Some(terminal_color(border.color));
        terminal.attributes.set(match border.line {
            LineStyle::Solid => Attribute::Underlined,
            LineStyle::Dotted => Attribute::Underdotted,
            LineStyle::Dashed => Attribute::Underdashed,
            LineStyle::Wavy => Attribute::Undercurled,
        });
    }
    terminal
}
