//! CLI error types

use std::io;
use std::path::PathBuf;

use jam_api::JamError;
use thiserror::Error;

/// Config file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors surfaced by a CLI run
///
/// `E` is the solver's error type, passed through unchanged.
#[derive(Debug, Error)]
pub enum CliError<E = JamError> {
    #[error("cannot open '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Run(E),
}
