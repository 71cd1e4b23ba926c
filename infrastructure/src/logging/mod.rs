//! Logging infrastructure: structured assessment event logging.
//!
//! Provides [`JsonlEventLogger`], a JSONL file writer that implements
//! the [`AssessmentEventLogger`](socialflip_application::AssessmentEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlEventLogger;
