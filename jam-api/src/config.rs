//! Run configuration

use jam_config::OutputConfig;
use jam_core::CaseLayout;

/// Run configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Case output template
    pub output: OutputConfig,
}

impl RunConfig {
    pub fn from_output(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Put each solution on the line after its `Case #k:` prefix
    pub fn with_insert_newline(mut self, insert_newline: bool) -> Self {
        self.output.insert_newline = insert_newline;
        self
    }

    pub fn layout(&self) -> CaseLayout {
        CaseLayout::from(self.output)
    }
}
