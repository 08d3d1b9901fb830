//! Token read errors
//!
//! Every typed read on a [`TokenStream`](crate::tokens::TokenStream) fails
//! with one of these. None of them is recovered inside the crate.

use std::fmt;
use std::io;

/// Token read error
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// A token could not be converted to the requested type
    #[error("cannot parse token \"{token}\": {reason}")]
    Parse { token: String, reason: String },

    /// A read was attempted after the last token
    #[error("input exhausted: expected another token")]
    Exhausted,

    /// The input source itself failed
    #[error("input error: {0}")]
    Io(#[from] io::Error),
}

impl TokenError {
    /// Build a parse error from the offending token and the converter's error
    pub fn parse(token: impl Into<String>, reason: impl fmt::Display) -> Self {
        TokenError::Parse {
            token: token.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, TokenError::Parse { .. })
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, TokenError::Exhausted)
    }

    /// The token that failed to parse, if this is a parse error
    pub fn token(&self) -> Option<&str> {
        match self {
            TokenError::Parse { token, .. } => Some(token.as_str()),
            _ => None,
        }
    }
}
