//! Domain layer for socialflip
//!
//! This crate contains the assessment model, the calculators and the summary
//! aggregation. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sections
//!
//! An assessment is made of five sections, each a set of answers keyed by
//! question id:
//!
//! - **Baseline**: weekly hours, cost per piece, monthly volume
//! - **Workload**: stress level, platforms, overtime frequency
//! - **Repurposing**: primary format, platforms, repurposing rate
//! - **ROI**: revenue per piece, monthly leads, conversion rate
//! - **Time**: adaptation time, team size, hourly rate
//!
//! ## Calculators
//!
//! Each section is evaluated by a pure calculator into a [`SectionReport`]
//! of labelled metrics. The [`SummaryMetrics`] aggregate is only available
//! once every section has been answered.

pub mod answer;
pub mod assessment;
pub mod calculator;
pub mod config;
pub mod core;
pub mod lead;
pub mod metric;
pub mod report;
pub mod section;

// Re-export commonly used types
pub use answer::{AnswerRecord, AnswerValue};
pub use assessment::{Assessment, ImpactLevel, SummaryMetrics, calculate_summary_metrics};
pub use calculator::{
    BaselineMetrics, MultiplicationMetrics, RoiMetrics, SectionReport, StressMetrics,
    TimeSavingsMetrics, calculate_baseline_metrics, calculate_multiplication_metrics,
    calculate_roi_metrics, calculate_stress_metrics, calculate_time_savings_metrics,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, number::round_half_up};
pub use lead::{Lead, LeadField, LeadValidationError};
pub use metric::{Metric, MetricValue, Tone, Unit};
pub use report::{AssessmentReport, ReportLine};
pub use section::{Question, QuestionKind, Section, Source};
