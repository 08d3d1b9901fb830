//! API error type

use std::io;
use thiserror::Error;

pub use jam_core::TokenError;

/// Default error type for solvers and runs
///
/// Solvers may use their own error type instead, as long as it converts from
/// [`TokenError`] and [`io::Error`].
#[derive(Error, Debug)]
pub enum JamError {
    /// Reading or parsing the input failed
    #[error("{0}")]
    Token(#[from] TokenError),

    /// Writing the output failed (other than a closed pipe)
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// The solver rejected a case
    #[error("solver error: {0}")]
    Solve(String),
}

impl JamError {
    pub fn solve(message: impl Into<String>) -> Self {
        JamError::Solve(message.into())
    }

    /// Pipeline phase the error came from
    pub fn phase(&self) -> &'static str {
        match self {
            JamError::Token(_) => "tokens",
            JamError::Output(_) => "output",
            JamError::Solve(_) => "solver",
        }
    }
}
