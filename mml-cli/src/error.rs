use config::ConfigError;
use std::fmt;
use std::io;

/// Errors surfaced to the user by the `mml` binary.
#[derive(Debug)]
pub enum CliError {
    /// Reading an input file failed
    Io { path: String, source: io::Error },
    /// Configuration could not be loaded or deserialized
    Config(ConfigError),
    /// Serializing JSON output failed
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io { path, source } => write!(f, "Cannot read '{}': {}", path, source),
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::Json(err) => write!(f, "Error formatting tokens: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Config(err) => Some(err),
            CliError::Json(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}
