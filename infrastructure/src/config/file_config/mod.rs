//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod report;
mod webhook;

pub use output::FileOutputConfig;
pub use report::FileReportConfig;
pub use webhook::{DEFAULT_WEBHOOK_URL, FileWebhookConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("webhook.url cannot be empty")]
    EmptyWebhookUrl,

    #[error("webhook.url must be an http(s) URL, got '{0}'")]
    InvalidWebhookUrl(String),

    #[error("report.output_path cannot be empty")]
    EmptyOutputPath,

    #[error("report.booking_url cannot be empty")]
    EmptyBookingUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Lead webhook settings
    pub webhook: FileWebhookConfig,
    /// PDF report settings
    pub report: FileReportConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.webhook.validate()?;
        self.report.validate()?;
        Ok(())
    }
}
