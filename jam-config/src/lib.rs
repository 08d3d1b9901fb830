//! Jam Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all jam crates.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Configuration for the case output template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Print the solution on the line after `Case #k:` instead of after a space
    #[serde(default)]
    pub insert_newline: bool,
}

impl OutputConfig {
    pub fn new(insert_newline: bool) -> Self {
        Self { insert_newline }
    }
}

/// Log level vocabulary shared by the config file and the CLI
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a log level name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLogLevel(pub String);

impl fmt::Display for UnknownLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level '{}' (expected error, warn, info, debug or trace)",
            self.0
        )
    }
}

impl std::error::Error for UnknownLogLevel {}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            // silent = only errors
            "silent" | "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(UnknownLogLevel(s.to_string())),
        }
    }
}

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colored multi-line output (development)
    Pretty,
    /// Single-line output without timestamps
    #[default]
    Compact,
    /// JSON lines (tool integration)
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "unknown log format '{s}' (expected pretty, compact or json)"
            )),
        }
    }
}

/// Pipeline phase, used for phase-specific log filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Tokens,
    Driver,
    Output,
    Cli,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Tokens, Phase::Driver, Phase::Output, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Tokens => "tokens",
            Phase::Driver => "driver",
            Phase::Output => "output",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("jam::{}", self.as_str())
    }
}

/// Per-phase log level overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PhaseLevels {
    pub tokens: Option<LogLevel>,
    pub driver: Option<LogLevel>,
    pub output: Option<LogLevel>,
    pub cli: Option<LogLevel>,
}

impl PhaseLevels {
    pub fn get(&self, phase: Phase) -> Option<LogLevel> {
        match phase {
            Phase::Tokens => self.tokens,
            Phase::Driver => self.driver,
            Phase::Output => self.output,
            Phase::Cli => self.cli,
        }
    }
}

/// Contents of an optional JSON configuration file.
///
/// Every field is optional; a missing field defers to the command line or
/// to the program's own default.
///
/// ```json
/// { "insert_newline": true, "log_level": "debug", "phases": { "tokens": "trace" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JamConfig {
    pub insert_newline: Option<bool>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
    #[serde(default)]
    pub phases: PhaseLevels,
}
