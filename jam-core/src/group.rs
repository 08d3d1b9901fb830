//! Typed reads spanning one or more tokens
//!
//! A [`FromTokens`] value knows how many tokens it occupies and how to read
//! them. Scalars take one token through `FromStr`; tuples read their fields
//! left to right.

use std::io::BufRead;

use crate::error::TokenError;
use crate::tokens::TokenStream;

/// A value that can be read from a token stream
pub trait FromTokens: Sized {
    fn from_tokens<R: BufRead>(tokens: &mut TokenStream<R>) -> Result<Self, TokenError>;
}

macro_rules! from_tokens_via_fromstr {
    ( $( $type:ty )+ ) => {$(
        impl FromTokens for $type {
            fn from_tokens<R: BufRead>(tokens: &mut TokenStream<R>) -> Result<Self, TokenError> {
                tokens.next::<$type>()
            }
        }
    )+}
}

from_tokens_via_fromstr! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64
    bool char String
}

macro_rules! tuple_from_tokens {
    ( $( $name:ident )+ ) => {
        impl<$( $name: FromTokens ),+> FromTokens for ( $( $name, )+ ) {
            fn from_tokens<R: BufRead>(tokens: &mut TokenStream<R>) -> Result<Self, TokenError> {
                Ok(( $( $name::from_tokens(tokens)?, )+ ))
            }
        }
    };
}

tuple_from_tokens! { A }
tuple_from_tokens! { A B }
tuple_from_tokens! { A B C }
tuple_from_tokens! { A B C D }
tuple_from_tokens! { A B C D E }
tuple_from_tokens! { A B C D E F }
tuple_from_tokens! { A B C D E F G }
tuple_from_tokens! { A B C D E F G H }
