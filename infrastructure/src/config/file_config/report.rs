//! Report configuration from TOML (`[report]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use socialflip_application::{DEFAULT_REPORT_PATH, ReportSettings};
use socialflip_domain::report::DEFAULT_BOOKING_URL;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportConfig {
    /// Default PDF destination
    pub output_path: PathBuf,
    /// Discovery call link shown in the report
    pub booking_url: String,
}

impl Default for FileReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_REPORT_PATH),
            booking_url: DEFAULT_BOOKING_URL.to_string(),
        }
    }
}

impl FileReportConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyOutputPath);
        }
        if self.booking_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBookingUrl);
        }
        Ok(())
    }

    pub fn to_settings(&self) -> ReportSettings {
        ReportSettings::default()
            .with_output_path(self.output_path.clone())
            .with_booking_url(self.booking_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_application_settings() {
        assert_eq!(
            FileReportConfig::default().to_settings(),
            ReportSettings::default()
        );
    }

    #[test]
    fn test_empty_booking_url_rejected() {
        let config = FileReportConfig {
            booking_url: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBookingUrl));
    }
}
