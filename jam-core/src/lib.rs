//! Jam Core - token stream, case driver and case output (pure pipeline, no file handling)
//!
//! The pipeline runs in one direction and is pulled from the end:
//! the output formatter pulls solutions from the case driver, which pulls
//! tokens from the token stream. Nothing is produced ahead of demand.
//!
//! Sources and sinks are passed in already open; this crate never resolves
//! paths or touches stdin/stdout on its own.

pub mod driver;
pub mod error;
pub mod group;
pub mod output;
pub mod target;
pub mod tokens;

pub use driver::{counted, drive_counted, drive_sequence, sequence, Counted, CountedCases, Sequence, Solver};
pub use error::TokenError;
pub use group::FromTokens;
pub use output::{emit_cases, format_and_emit, format_case, CaseIndex, CaseLayout, Emitted};
pub use tokens::{NextMany, ParseFn, TokenStream, Tokens};

// Re-export config types from jam-config
pub use jam_config::{OutputConfig, Phase};
