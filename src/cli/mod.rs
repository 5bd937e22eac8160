//! CLI command implementations for Folio Quest.

pub(crate) mod layout;
pub(crate) mod play;
pub(crate) mod save;

mod keys;
mod view;

use clap::ValueEnum;
use folioquest::StorageError;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Output format for the inspection commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Resolve `--save-file`, falling back to the per-user data directory.
pub(crate) fn resolve_save_path(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(folioquest::SaveSlot::default_path()?),
    }
}

/// Set up `env_logger`.
///
/// With `log_file` every record goes to that file. Otherwise records go to
/// stderr, except under the TUI where stderr would corrupt the screen: there
/// the logger is only installed when `RUST_LOG` asks for it.
pub(crate) fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<(), CliError> {
    let env = env_logger::Env::default();
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::new(format!("Failed to create {}: {e}", path.display()))
            })?;
            let mut builder = env_logger::Builder::from_env(env.default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None if tui && std::env::var_os("RUST_LOG").is_none() => return Ok(()),
        None => env_logger::Builder::from_env(env.default_filter_or("warn")),
    };
    builder
        .try_init()
        .map_err(|e| CliError::new(format!("Failed to initialise logging: {e}")))
}
