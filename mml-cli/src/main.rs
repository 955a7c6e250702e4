//! Command-line interface for mml
//! This binary inspects MML markup the way an editor sees it: token streams, highlighted
//! output and tag completions.
//!
//! Usage:
//!   mml tokens `<path>` [--format `<simple|json>`]   - Print the tokens of every line
//!   mml highlight `<path>`                          - Render the file with the theme colors
//!   mml complete `<text>`                           - List completions for text before a cursor
//!
//! `--config <path>` layers a TOML file over the built-in defaults and `./mml.toml`.
//! Set `RUST_LOG=mml=debug` (or `trace`) for diagnostics on stderr.

mod commands;
mod error;

use clap::{Arg, ArgAction, ArgMatches, Command};
use error::CliError;
use mml_config::{Loader, MmlConfig};

fn cli() -> Command {
    Command::new("mml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting MML rich-text markup")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the tokens and end state of every line")
                .arg(Arg::new("path").help("Path to the MML file").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["simple", "json"])
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Render the file to the terminal using the configured theme")
                .arg(Arg::new("path").help("Path to the MML file").required(true)),
        )
        .subcommand(
            Command::new("complete")
                .about("List tag completions for the text before a cursor")
                .arg(
                    Arg::new("text")
                        .help("Text immediately before the cursor")
                        .required(true),
                )
                .arg(
                    Arg::new("ignore-case")
                        .long("ignore-case")
                        .short('i')
                        .help("Match the typed prefix ignoring case")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    init_tracing();

    let matches = cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches.get_one::<String>("config"))?;

    match matches.subcommand() {
        Some(("tokens", sub)) => {
            let path = required(sub, "path");
            let format = sub
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("simple");
            commands::handle_tokens_command(path, format)
        }
        Some(("highlight", sub)) => commands::handle_highlight_command(required(sub, "path"), &config),
        Some(("complete", sub)) => {
            let mut options = commands::completion_options(&config);
            if sub.get_flag("ignore-case") {
                options.case_sensitive = false;
            }
            commands::handle_complete_command(required(sub, "text"), &options);
            Ok(())
        }
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(path: Option<&String>) -> Result<MmlConfig, CliError> {
    let mut loader = Loader::new().with_optional_file("mml.toml");
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

/// Only installs a subscriber when `RUST_LOG` is set, so normal output stays clean.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}
