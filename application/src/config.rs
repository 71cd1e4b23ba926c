//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as where the report is written and which booking link it advertises.

use socialflip_domain::report::DEFAULT_BOOKING_URL;
use std::path::PathBuf;

/// Default file name for the exported report
pub const DEFAULT_REPORT_PATH: &str = "socialflip-assessment-report.pdf";

/// Report export behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Where the report is written when no explicit path is given.
    pub output_path: PathBuf,
    /// Discovery call link printed in the call to action.
    pub booking_url: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_REPORT_PATH),
            booking_url: DEFAULT_BOOKING_URL.to_string(),
        }
    }
}

impl ReportSettings {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_booking_url(mut self, url: impl Into<String>) -> Self {
        self.booking_url = url.into();
        self
    }
}
