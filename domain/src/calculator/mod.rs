//! Section calculators
//!
//! Each calculator is a pure function from an [`AnswerRecord`] to a typed
//! metrics struct. The typed struct converts into a [`SectionReport`], the
//! uniform shape the presentation layer renders.
//!
//! ```text
//! AnswerRecord ──► calculate_*() ──► *Metrics ──► SectionReport
//!                                                 ├─ metrics: Vec<Metric>
//!                                                 └─ warnings: Vec<String>
//! ```
//!
//! [`AnswerRecord`]: crate::answer::AnswerRecord

pub mod baseline;
pub mod multiplication;
pub mod roi;
pub mod stress;
pub mod tables;
pub mod time_savings;

use crate::metric::Metric;
use serde::{Deserialize, Serialize};

pub use baseline::{BaselineMetrics, calculate_baseline_metrics};
pub use multiplication::{MultiplicationMetrics, UtilizationCategory, calculate_multiplication_metrics};
pub use roi::{RoiCategory, RoiMetrics, calculate_roi_metrics};
pub use stress::{StressCategory, StressMetrics, calculate_stress_metrics};
pub use tables::{ContentFormat, OvertimeFrequency, RepurposingRate};
pub use time_savings::{SavingsCategory, TimeSavingsMetrics, calculate_time_savings_metrics};

/// Rendered result of one section calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    /// Metrics in display order
    pub metrics: Vec<Metric>,
    /// Warnings that fired for the current answers (any subset, in order)
    pub warnings: Vec<String>,
}

impl SectionReport {
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self {
            metrics,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Find a metric by label
    pub fn metric(&self, label: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.label == label)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
