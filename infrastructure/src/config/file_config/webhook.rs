//! Webhook configuration from TOML (`[webhook]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// CRM automation hook that receives registered leads
pub const DEFAULT_WEBHOOK_URL: &str = "https://hook.us2.make.com/uy0yllw6gxpx6j1blr91dlqmx8ry6itg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebhookConfig {
    pub url: String,
}

impl Default for FileWebhookConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
        }
    }
}

impl FileWebhookConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyWebhookUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidWebhookUrl(self.url.clone()));
        }
        Ok(())
    }
}
