//! Report exporter port

use socialflip_domain::AssessmentReport;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to render report: {0}")]
    Render(String),

    #[error("Failed to write report to {path}: {message}")]
    Write { path: String, message: String },
}

/// Renders an [`AssessmentReport`] to a file.
pub trait ReportExporter: Send + Sync {
    /// Write the report to `path`, returning the path actually written.
    fn export(&self, report: &AssessmentReport, path: &Path) -> Result<PathBuf, ExportError>;
}
