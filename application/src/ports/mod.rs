//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod event_logger;
pub mod lead_submitter;
pub mod report_exporter;
