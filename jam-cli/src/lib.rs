//! Jam CLI - command line front end for solver programs
//!
//! A solver binary is usually one function plus
//!
//! ```no_run
//! use jam_cli::{autosolve, counted, JamError, TokenStream};
//! use std::io::BufRead;
//! use std::process::ExitCode;
//!
//! fn solve<R: BufRead>(tokens: &mut TokenStream<R>) -> Result<u64, JamError> {
//!     let (a, b): (u64, u64) = tokens.read()?;
//!     Ok(a + b)
//! }
//!
//! fn main() -> ExitCode {
//!     autosolve(counted(solve))
//! }
//! ```

use std::fmt;
use std::io as stdio;
use std::process::ExitCode;

use clap::Parser;
use jam_api::target;
use tracing::{debug, info};

pub mod args;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;

pub use args::Cli;
pub use config::{load_config, LogConfig, Settings};
pub use error::{CliError, ConfigError};
pub use io::{open_input, open_output, Input, Output};

pub use jam_api::{
    counted, sequence, FromTokens, JamError, OutputConfig, RunConfig, RunOutput, Solver,
    TokenError, TokenStream,
};

/// Run `solver` with already parsed arguments
///
/// `defaults` is the program's own output layout, used when neither the
/// command line nor the config file sets one.
pub fn run_cli<S>(cli: &Cli, solver: S, defaults: OutputConfig) -> Result<RunOutput, CliError<S::Error>>
where
    S: Solver<Input>,
    S::Error: From<stdio::Error>,
{
    let file_config = cli.config.as_deref().map(load_config).transpose()?;
    let settings = Settings::resolve(cli, file_config.as_ref(), defaults);
    logging::init(&settings.log, settings.log_format);
    debug!(target: target::CLI, ?settings, "settings resolved");

    let input = open_input::<S::Error>(cli.in_file.as_deref())?;
    let mut output = open_output::<S::Error>(cli.out_file.as_deref())?;

    jam_api::run(solver, input, &mut output, &RunConfig::from_output(settings.output))
        .map_err(CliError::Run)
}

/// Parse the process arguments and run `solver`
pub fn autosolve<S>(solver: S) -> ExitCode
where
    S: Solver<Input>,
    S::Error: From<stdio::Error> + fmt::Display,
{
    autosolve_with(solver, OutputConfig::default())
}

/// Like [`autosolve`], with a program default for the output layout
pub fn autosolve_with<S>(solver: S, defaults: OutputConfig) -> ExitCode
where
    S: Solver<Input>,
    S::Error: From<stdio::Error> + fmt::Display,
{
    let cli = Cli::parse();
    match run_cli(&cli, solver, defaults) {
        Ok(result) => {
            info!(target: target::CLI, cases = result.cases, interrupted = result.interrupted, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
