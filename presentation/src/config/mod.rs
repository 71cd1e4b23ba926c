//! Presentation-level configuration
//!
//! Output settings after command-line flags have been applied on top of the
//! loaded configuration file.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use socialflip_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Start from file values (`format` unset means the default)
    pub fn new(format: Option<OutputFormat>, color: bool) -> Self {
        Self {
            format: format.unwrap_or_default(),
            color,
        }
    }

    /// Command-line flags win over file values
    pub fn with_cli_overrides(mut self, format: Option<CliOutputFormat>, no_color: bool) -> Self {
        if let Some(format) = format {
            self.format = format.into();
        }
        if no_color {
            self.color = false;
        }
        self
    }
}
