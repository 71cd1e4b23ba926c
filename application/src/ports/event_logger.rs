//! Port for structured assessment event logging.
//!
//! Defines the [`AssessmentEventLogger`] trait for recording assessment events
//! (lead registration, answers, section reports, summary) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the assessment
//! history in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured assessment event for logging.
pub struct AssessmentEvent {
    /// Event type identifier (e.g., "answer", "section_report", "summary").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AssessmentEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging assessment events.
///
/// `log` is synchronous and infallible; implementations drop records they
/// cannot write.
pub trait AssessmentEventLogger: Send + Sync {
    fn log(&self, event: AssessmentEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoEventLogger;

impl AssessmentEventLogger for NoEventLogger {
    fn log(&self, _event: AssessmentEvent) {}
}
