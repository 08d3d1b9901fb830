//! Jam API - Run orchestration layer
//!
//! Wires a solver, an open input and an open output together:
//! - `run` for any [`Solver`]
//! - `solve_counted` for a function solving one case per call
//! - `solve_sequence` for a function producing every solution itself
//!
//! Path handling and stdin/stdout defaults live in the CLI crate.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::info;

pub mod config;
pub mod error;
pub mod types;

pub use config::RunConfig;
pub use error::{JamError, TokenError};
pub use types::RunOutput;

// Re-export core types
pub use jam_config;
pub use jam_config::OutputConfig;
pub use jam_core::{counted, sequence, CaseIndex, Counted, FromTokens, Sequence, Solver, TokenStream};
pub use jam_core::target;

/// Run a solver over `input`, writing numbered cases to `output`
///
/// Returns once the solutions run out or the output is closed by its
/// reader. Token and solver errors are returned as the solver's own error
/// type; everything written before the error stays written.
pub fn run<R, W, S>(solver: S, input: R, output: &mut W, config: &RunConfig) -> Result<RunOutput, S::Error>
where
    R: BufRead,
    W: Write + ?Sized,
    S: Solver<R>,
    S::Error: From<std::io::Error>,
{
    info!(target: target::DRIVER, insert_newline = config.output.insert_newline, "starting run");

    let solutions = solver.produce_solutions(TokenStream::new(input));
    let result = RunOutput::from(jam_core::emit_cases(solutions, output, config.layout())?);

    if result.interrupted {
        info!(target: target::OUTPUT, cases = result.cases, "output closed by reader, run stopped");
    } else {
        info!(target: target::OUTPUT, cases = result.cases, "run completed");
    }
    Ok(result)
}

/// Solve a problem whose first token is the number of cases
///
/// `solve_one` is called once per case with the shared token stream.
pub fn solve_counted<R, W, F, S, E>(
    solve_one: F,
    input: R,
    output: &mut W,
    config: &RunConfig,
) -> Result<RunOutput, E>
where
    R: BufRead,
    W: Write + ?Sized,
    F: FnMut(&mut TokenStream<R>) -> Result<S, E>,
    S: fmt::Display,
    E: From<TokenError> + From<std::io::Error>,
{
    run(Counted(solve_one), input, output, config)
}

/// Solve a problem with a producer that yields every case's solution
///
/// `solve_many` is called exactly once and decides how many cases there are.
pub fn solve_sequence<R, W, F, I, S, E>(
    solve_many: F,
    input: R,
    output: &mut W,
    config: &RunConfig,
) -> Result<RunOutput, E>
where
    R: BufRead,
    W: Write + ?Sized,
    F: FnOnce(TokenStream<R>) -> I,
    I: IntoIterator<Item = Result<S, E>>,
    S: fmt::Display,
    E: From<std::io::Error>,
{
    run(Sequence(solve_many), input, output, config)
}

/// Run a solver over in-memory text and return the rendered output
pub fn run_to_string<'a, S>(solver: S, input: &'a str, config: &RunConfig) -> Result<String, S::Error>
where
    S: Solver<&'a [u8]>,
    S::Error: From<std::io::Error>,
{
    let mut output = Vec::new();
    run(solver, input.as_bytes(), &mut output, config)?;
    // every byte written came from a `String`
    Ok(String::from_utf8_lossy(&output).into_owned())
}
