//! Infrastructure layer for socialflip
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod report;
pub mod webhook;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_WEBHOOK_URL, FileConfig, FileOutputConfig,
    FileReportConfig, FileWebhookConfig,
};
pub use logging::JsonlEventLogger;
pub use report::PdfReportExporter;
pub use webhook::WebhookLeadSubmitter;
