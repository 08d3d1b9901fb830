//! Case driver
//!
//! Turns a solver into one lazy sequence of per-case results. Two solver
//! shapes are supported:
//!
//! - a single-case function, called once per case after a leading case count
//!   ([`Counted`], [`drive_counted`]);
//! - a sequence producer, handed the token stream once and left to decide how
//!   many results to yield ([`Sequence`], [`drive_sequence`]).
//!
//! Both go through the [`Solver`] trait, so the caller picks the shape once,
//! when it picks the adapter.

use std::fmt;
use std::io::BufRead;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::TokenError;
use crate::target;
use crate::tokens::TokenStream;

/// Something that produces the solutions of a whole problem
pub trait Solver<R: BufRead> {
    /// One case's answer
    type Solution: fmt::Display;
    /// Error passed through unchanged to whoever drives the sequence
    type Error;
    /// Lazy solution sequence
    type Solutions: Iterator<Item = Result<Self::Solution, Self::Error>>;

    /// Take over the token stream and start producing solutions
    fn produce_solutions(self, tokens: TokenStream<R>) -> Self::Solutions;
}

/// Single-case function adapter
#[derive(Clone, Copy)]
pub struct Counted<F>(pub F);

/// Sequence producer adapter
#[derive(Clone, Copy)]
pub struct Sequence<F>(pub F);

impl<F> fmt::Debug for Counted<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Counted(..)")
    }
}

impl<F> fmt::Debug for Sequence<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sequence(..)")
    }
}

/// Wrap a function that solves one case per call
pub fn counted<R, F, S, E>(solve_one: F) -> Counted<F>
where
    R: BufRead,
    F: FnMut(&mut TokenStream<R>) -> Result<S, E>,
{
    Counted(solve_one)
}

/// Wrap a function that produces every case's solution itself
pub fn sequence<R, F, I, S, E>(solve_many: F) -> Sequence<F>
where
    R: BufRead,
    F: FnOnce(TokenStream<R>) -> I,
    I: IntoIterator<Item = Result<S, E>>,
{
    Sequence(solve_many)
}

impl<R, F, S, E> Solver<R> for Counted<F>
where
    R: BufRead,
    F: FnMut(&mut TokenStream<R>) -> Result<S, E>,
    S: fmt::Display,
    E: From<TokenError>,
{
    type Solution = S;
    type Error = E;
    type Solutions = CountedCases<R, F>;

    fn produce_solutions(self, tokens: TokenStream<R>) -> Self::Solutions {
        drive_counted(self.0, tokens)
    }
}

impl<R, F, I, S, E> Solver<R> for Sequence<F>
where
    R: BufRead,
    F: FnOnce(TokenStream<R>) -> I,
    I: IntoIterator<Item = Result<S, E>>,
    S: fmt::Display,
{
    type Solution = S;
    type Error = E;
    type Solutions = I::IntoIter;

    fn produce_solutions(self, tokens: TokenStream<R>) -> Self::Solutions {
        drive_sequence(self.0, tokens)
    }
}

/// Read a case count `n`, then call `solve_one` exactly `n` times
///
/// Nothing is read until the first pull. A negative count means no cases.
/// A bad or missing count, or a failed case, is yielded once as an error,
/// after which the sequence ends.
pub fn drive_counted<R, F, S, E>(solve_one: F, tokens: TokenStream<R>) -> CountedCases<R, F>
where
    R: BufRead,
    F: FnMut(&mut TokenStream<R>) -> Result<S, E>,
    E: From<TokenError>,
{
    CountedCases {
        tokens,
        solve_one,
        remaining: None,
        solved: 0,
    }
}

/// Hand the token stream to `solve_many` once and forward what it yields
pub fn drive_sequence<R, F, I, S, E>(solve_many: F, tokens: TokenStream<R>) -> I::IntoIter
where
    R: BufRead,
    F: FnOnce(TokenStream<R>) -> I,
    I: IntoIterator<Item = Result<S, E>>,
{
    debug!(target: target::DRIVER, "starting sequence producer");
    solve_many(tokens).into_iter()
}

/// Solutions of a counted problem, see [`drive_counted`]
pub struct CountedCases<R, F> {
    tokens: TokenStream<R>,
    solve_one: F,
    /// Cases left; `None` until the count has been read
    remaining: Option<usize>,
    solved: usize,
}

impl<R, F> CountedCases<R, F> {
    /// Cases solved so far
    pub fn solved(&self) -> usize {
        self.solved
    }

    /// The underlying token stream, e.g. to check for trailing input
    pub fn tokens(&mut self) -> &mut TokenStream<R> {
        &mut self.tokens
    }
}

impl<R, F, S, E> Iterator for CountedCases<R, F>
where
    R: BufRead,
    F: FnMut(&mut TokenStream<R>) -> Result<S, E>,
    E: From<TokenError>,
{
    type Item = Result<S, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = match self.remaining {
            Some(remaining) => remaining,
            None => match self.tokens.next_count() {
                Ok(count) => {
                    debug!(target: target::DRIVER, cases = count, "case count");
                    count
                }
                Err(err) => {
                    self.remaining = Some(0);
                    return Some(Err(E::from(err)));
                }
            },
        };
        if remaining == 0 {
            self.remaining = Some(0);
            return None;
        }
        self.remaining = Some(remaining - 1);
        self.solved += 1;
        trace!(target: target::DRIVER, case = self.solved, "solving case");
        let solution = (self.solve_one)(&mut self.tokens);
        if solution.is_err() {
            debug!(target: target::DRIVER, case = self.solved, "case failed, stopping");
            self.remaining = Some(0);
        }
        Some(solution)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (0, Some(remaining)),
            None => (0, None),
        }
    }
}

impl<R, F, S, E> FusedIterator for CountedCases<R, F>
where
    R: BufRead,
    F: FnMut(&mut TokenStream<R>) -> Result<S, E>,
    E: From<TokenError>,
{
}
