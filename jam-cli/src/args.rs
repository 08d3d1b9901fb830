//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use jam_config::{LogFormat, LogLevel};

#[derive(Parser, Debug, Clone, Default)]
#[command(
    about = "Solve a code jam: read cases from IN_FILE and write \"Case #k: answer\" lines to OUT_FILE"
)]
pub struct Cli {
    /// The input file to use. Defaults to stdin
    #[arg(value_name = "IN_FILE")]
    pub in_file: Option<PathBuf>,

    /// The file to write the solutions to. Defaults to stdout
    #[arg(value_name = "OUT_FILE")]
    pub out_file: Option<PathBuf>,

    /// Print each solution on the line after its "Case #k:" prefix
    #[arg(long)]
    pub insert_newline: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log format: pretty, compact or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["solver"]).unwrap();
        assert!(cli.in_file.is_none());
        assert!(cli.out_file.is_none());
        assert!(!cli.insert_newline);
    }

    #[test]
    fn test_positional_files() {
        let cli = Cli::try_parse_from(["solver", "A-small.in", "A-small.out"]).unwrap();
        assert_eq!(cli.in_file, Some(PathBuf::from("A-small.in")));
        assert_eq!(cli.out_file, Some(PathBuf::from("A-small.out")));
    }

    #[test]
    fn test_rejects_bad_log_level() {
        assert!(Cli::try_parse_from(["solver", "--log-level", "loud"]).is_err());
        let cli = Cli::try_parse_from(["solver", "--log-level", "trace"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Trace));
    }

    #[test]
    fn test_rejects_third_positional() {
        assert!(Cli::try_parse_from(["solver", "a", "b", "c"]).is_err());
    }
}
