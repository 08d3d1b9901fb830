//! jam-sum: each case is a count-prefixed list of integers, answer their sum

use std::io::BufRead;
use std::process::ExitCode;

use jam_cli::{autosolve, counted, JamError, TokenStream};

fn solve<R: BufRead>(tokens: &mut TokenStream<R>) -> Result<i64, JamError> {
    let mut sum: i64 = 0;
    for value in tokens.next_counted::<i64>()? {
        sum = sum
            .checked_add(value?)
            .ok_or_else(|| JamError::solve("sum does not fit in 64 bits"))?;
    }
    Ok(sum)
}

fn main() -> ExitCode {
    autosolve(counted(solve))
}
