//! CLI configuration
//!
//! Merges the command line, the optional JSON config file and the solver
//! program's own defaults into one set of settings.

use std::path::Path;

use jam_config::{JamConfig, LogFormat, LogLevel, OutputConfig, Phase, PhaseLevels};
use tracing::Level;

use crate::args::Cli;
use crate::error::ConfigError;

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub tokens: Option<Level>,
    pub driver: Option<Level>,
    pub output: Option<Level>,
    pub cli: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            tokens: None,
            driver: None,
            output: None,
            cli: None,
        }
    }
}

impl LogConfig {
    pub fn from_levels(global: LogLevel, phases: &PhaseLevels) -> Self {
        let level = |phase| phases.get(phase).map(tracing_level);
        Self {
            global: tracing_level(global),
            tokens: level(Phase::Tokens),
            driver: level(Phase::Driver),
            output: level(Phase::Output),
            cli: level(Phase::Cli),
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Tokens => self.tokens,
            Phase::Driver => self.driver,
            Phase::Output => self.output,
            Phase::Cli => self.cli,
        };
        specific.unwrap_or(self.global)
    }
}

pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: OutputConfig,
    pub log: LogConfig,
    pub log_format: LogFormat,
}

impl Settings {
    /// Command line first, then the config file, then `defaults`
    pub fn resolve(cli: &Cli, file: Option<&JamConfig>, defaults: OutputConfig) -> Self {
        let file_insert_newline = file.and_then(|f| f.insert_newline);
        let insert_newline =
            cli.insert_newline || file_insert_newline.unwrap_or(defaults.insert_newline);

        let log_level = cli
            .log_level
            .or_else(|| file.and_then(|f| f.log_level))
            .unwrap_or_default();
        let log_format = cli
            .log_format
            .or_else(|| file.and_then(|f| f.log_format))
            .unwrap_or_default();
        let phases = file.map(|f| f.phases.clone()).unwrap_or_default();

        Self {
            output: OutputConfig::new(insert_newline),
            log: LogConfig::from_levels(log_level, &phases),
            log_format,
        }
    }
}

/// Read and parse a JSON config file
pub fn load_config(path: &Path) -> Result<JamConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
