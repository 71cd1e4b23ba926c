//! Configuration file loading for socialflip
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `SOCIALFLIP_<SECTION>__<KEY>` (e.g. `SOCIALFLIP_WEBHOOK__URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./socialflip.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/socialflip/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_WEBHOOK_URL, FileConfig, FileOutputConfig, FileReportConfig,
    FileWebhookConfig,
};
pub use loader::ConfigLoader;
