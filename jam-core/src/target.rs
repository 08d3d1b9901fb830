//! Log targets, one per pipeline phase
//!
//! `tracing` needs targets known at compile time, so they are spelled out
//! here rather than built from [`Phase::target`].

#[cfg(test)]
use jam_config::Phase;

pub const TOKENS: &str = "jam::tokens";
pub const DRIVER: &str = "jam::driver";
pub const OUTPUT: &str = "jam::output";
pub const CLI: &str = "jam::cli";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_match_phases() {
        for phase in Phase::ALL {
            let target = match phase {
                Phase::Tokens => TOKENS,
                Phase::Driver => DRIVER,
                Phase::Output => OUTPUT,
                Phase::Cli => CLI,
            };
            assert_eq!(target, phase.target());
        }
    }
}
