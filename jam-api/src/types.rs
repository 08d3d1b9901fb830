//! API result types

use jam_core::Emitted;

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Cases written and flushed
    pub cases: usize,
    /// The output was closed by its reader before all cases were written
    pub interrupted: bool,
}

impl From<Emitted> for RunOutput {
    fn from(emitted: Emitted) -> Self {
        Self {
            cases: emitted.cases,
            interrupted: emitted.interrupted,
        }
    }
}
