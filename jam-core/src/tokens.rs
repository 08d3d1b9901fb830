//! Whitespace token stream
//!
//! Wraps a buffered reader and hands out whitespace-delimited tokens one at a
//! time. Input is pulled a line at a time, so only the unread tokens of the
//! current line are ever held in memory.

use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;
use std::iter::FusedIterator;
use std::num::ParseIntError;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::TokenError;
use crate::group::FromTokens;
use crate::target;

/// `str::parse` as a plain function pointer, used by the `FromStr` reads
pub type ParseFn<T> = fn(&str) -> Result<T, <T as FromStr>::Err>;

/// Token stream
///
/// Owns a single forward cursor over the source. Tokens come out strictly in
/// source order and are never handed out twice.
pub struct TokenStream<R> {
    /// Underlying line source
    reader: R,
    /// Reused line buffer
    line: String,
    /// Unread tokens of the current line
    pending: VecDeque<String>,
    /// Tokens handed out so far
    consumed: usize,
    /// The reader returned EOF
    at_eof: bool,
}

impl<R: BufRead> TokenStream<R> {
    /// Create a token stream over a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
            consumed: 0,
            at_eof: false,
        }
    }

    /// Number of tokens consumed so far
    pub fn tokens_consumed(&self) -> usize {
        self.consumed
    }

    /// Read lines until a token is available. Returns false at end of input.
    fn fill(&mut self) -> Result<bool, TokenError> {
        while self.pending.is_empty() {
            if self.at_eof {
                return Ok(false);
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                self.at_eof = true;
                debug!(target: target::TOKENS, consumed = self.consumed, "end of input");
                return Ok(false);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }

    /// Check whether another token remains, without consuming it
    pub fn has_next(&mut self) -> Result<bool, TokenError> {
        self.fill()
    }

    /// Consume one raw token
    pub fn next_token(&mut self) -> Result<String, TokenError> {
        if !self.fill()? {
            return Err(TokenError::Exhausted);
        }
        let token = self.pending.pop_front().ok_or(TokenError::Exhausted)?;
        self.consumed += 1;
        trace!(target: target::TOKENS, index = self.consumed, token = %token, "token");
        Ok(token)
    }

    /// Lazy sequence of the remaining raw tokens
    ///
    /// Ends at end of input. Tokens pulled from it are gone from the stream.
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            stream: self,
            done: false,
        }
    }

    /// Consume one token and convert it with `parse`
    pub fn next_with<T, E, F>(&mut self, parse: F) -> Result<T, TokenError>
    where
        F: FnOnce(&str) -> Result<T, E>,
        E: fmt::Display,
    {
        let token = self.next_token()?;
        match parse(&token) {
            Ok(value) => Ok(value),
            Err(err) => Err(TokenError::parse(token, err)),
        }
    }

    /// Consume one token and parse it with `FromStr`
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T, TokenError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.next_with(str::parse::<T>)
    }

    /// Lazily consume exactly `n` tokens, converting each with `parse`
    ///
    /// Each pull consumes one token. If the input ends early the sequence
    /// yields [`TokenError::Exhausted`] and stops; earlier reads stay consumed.
    pub fn next_many_with<T, E, F>(&mut self, n: usize, parse: F) -> NextMany<'_, R, F>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: fmt::Display,
    {
        NextMany {
            stream: self,
            remaining: n,
            parse,
        }
    }

    /// Lazily consume exactly `n` tokens parsed with `FromStr`
    pub fn next_many<T>(&mut self, n: usize) -> NextMany<'_, R, ParseFn<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.next_many_with(n, str::parse::<T> as ParseFn<T>)
    }

    /// Consume one token as a count
    ///
    /// Any integer is accepted; a negative count means nothing follows and
    /// reads as 0.
    pub fn next_count(&mut self) -> Result<usize, TokenError> {
        self.next_with(|token| {
            let n: i64 = token.parse().map_err(|err: ParseIntError| err.to_string())?;
            usize::try_from(n.max(0)).map_err(|_| format!("count {n} does not fit in memory"))
        })
    }

    /// Read a count `n`, then lazily consume `n` tokens converted with `parse`
    ///
    /// The count token is read before this returns.
    pub fn next_counted_with<T, E, F>(&mut self, parse: F) -> Result<NextMany<'_, R, F>, TokenError>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: fmt::Display,
    {
        let n = self.next_count()?;
        debug!(target: target::TOKENS, count = n, "counted read");
        Ok(self.next_many_with(n, parse))
    }

    /// Read a count `n`, then lazily consume `n` tokens parsed with `FromStr`
    pub fn next_counted<T>(&mut self) -> Result<NextMany<'_, R, ParseFn<T>>, TokenError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.next_counted_with(str::parse::<T> as ParseFn<T>)
    }

    /// Read `n` values into a vector
    pub fn collect_many<T>(&mut self, n: usize) -> Result<Vec<T>, TokenError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.next_many(n).collect()
    }

    /// Read a count, then that many values into a vector
    pub fn collect_counted<T>(&mut self) -> Result<Vec<T>, TokenError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.next_counted()?.collect()
    }

    /// Read a value that spans one or more tokens, e.g. `(usize, String)`
    pub fn read<G: FromTokens>(&mut self) -> Result<G, TokenError> {
        G::from_tokens(self)
    }
}

impl<'a> TokenStream<&'a [u8]> {
    /// Token stream over in-memory text
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Lazy raw token sequence, see [`TokenStream::tokens`]
pub struct Tokens<'a, R> {
    stream: &'a mut TokenStream<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Tokens<'_, R> {
    type Item = Result<String, TokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.stream.next_token() {
            Ok(token) => Some(Ok(token)),
            Err(TokenError::Exhausted) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Tokens<'_, R> {}

/// Fixed-length lazy read, see [`TokenStream::next_many_with`]
pub struct NextMany<'a, R, F> {
    stream: &'a mut TokenStream<R>,
    remaining: usize,
    parse: F,
}

impl<R, T, E, F> Iterator for NextMany<'_, R, F>
where
    R: BufRead,
    F: FnMut(&str) -> Result<T, E>,
    E: fmt::Display,
{
    type Item = Result<T, TokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.stream.next_with(&mut self.parse);
        if item.is_err() {
            self.remaining = 0;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<R, T, E, F> FusedIterator for NextMany<'_, R, F>
where
    R: BufRead,
    F: FnMut(&str) -> Result<T, E>,
    E: fmt::Display,
{
}
