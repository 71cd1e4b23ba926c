//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod export_report;
pub mod register_lead;
pub mod run_assessment;
