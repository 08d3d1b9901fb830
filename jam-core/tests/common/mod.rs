//! Test helpers
//!
//! Run the whole token → driver → output pipeline over in-memory text.

#![allow(dead_code)]

use jam_core::{format_and_emit, Emitted, Solver, TokenError, TokenStream};
use std::io;

/// Error type used by the test solvers
#[derive(Debug)]
pub enum PipelineError {
    Token(TokenError),
    Output(io::Error),
}

impl From<TokenError> for PipelineError {
    fn from(err: TokenError) -> Self {
        PipelineError::Token(err)
    }
}

impl From<io::Error> for PipelineError {
    fn from(err: io::Error) -> Self {
        PipelineError::Output(err)
    }
}

/// Run `solver` over `input` and return what was written
pub fn run_pipeline<'a, S>(solver: S, input: &'a str, insert_newline: bool) -> Result<String, PipelineError>
where
    S: Solver<&'a [u8], Error = PipelineError>,
{
    let (output, emitted) = run_pipeline_with_summary(solver, input, insert_newline)?;
    assert!(!emitted.interrupted);
    Ok(output)
}

/// Same as [`run_pipeline`], also returning the emission summary
pub fn run_pipeline_with_summary<'a, S>(
    solver: S,
    input: &'a str,
    insert_newline: bool,
) -> Result<(String, Emitted), PipelineError>
where
    S: Solver<&'a [u8], Error = PipelineError>,
{
    let mut sink = Vec::new();
    let solutions = solver.produce_solutions(TokenStream::from_text(input));
    let emitted = format_and_emit(solutions, &mut sink, insert_newline)?;
    Ok((String::from_utf8(sink).expect("output is UTF-8"), emitted))
}
