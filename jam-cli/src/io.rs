//! Input/output opening
//!
//! A missing path (or `-`) means the process's own stdin/stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use jam_api::target;
use tracing::debug;

use crate::error::CliError;

/// Input type handed to solvers run through the CLI
pub type Input = Box<dyn BufRead>;

/// Output type the CLI writes cases to
pub type Output = Box<dyn Write>;

fn named_file(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

/// Open `path` for reading, or stdin
pub fn open_input<E>(path: Option<&Path>) -> Result<Input, CliError<E>> {
    match named_file(path) {
        Some(path) => {
            debug!(target: target::CLI, path = %path.display(), "opening input file");
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Create (or truncate) `path` for writing, or stdout
pub fn open_output<E>(path: Option<&Path>) -> Result<Output, CliError<E>> {
    match named_file(path) {
        Some(path) => {
            debug!(target: target::CLI, path = %path.display(), "creating output file");
            let file = File::create(path).map_err(|source| CliError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
