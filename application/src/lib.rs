//! Application layer for socialflip
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_REPORT_PATH, ReportSettings};
pub use ports::{
    event_logger::{AssessmentEvent, AssessmentEventLogger, NoEventLogger},
    lead_submitter::{LeadSubmitter, SubmissionError},
    report_exporter::{ExportError, ReportExporter},
};
pub use use_cases::export_report::{ExportReportError, ExportReportOutput, ExportReportUseCase};
pub use use_cases::register_lead::{RegisterLeadError, RegisterLeadUseCase};
pub use use_cases::run_assessment::AssessmentSession;
