//! Assessment aggregate
//!
//! [`Assessment`] holds one optional [`AnswerRecord`] per section. A section
//! is "present" as soon as it has been touched, even if only one of its
//! questions was answered; the summary unlocks once all five are present.

pub mod summary;

pub use summary::{ImpactLevel, SummaryMetrics, calculate_summary_metrics};

use crate::answer::{AnswerRecord, AnswerValue};
use crate::calculator::SectionReport;
use crate::core::error::DomainError;
use crate::section::Section;
use serde::{Deserialize, Serialize};

/// Answers for the whole assessment, keyed by section
///
/// Serializes with the section keys (`contentBaseline`, `workloadAssessment`,
/// ...) so a saved answers file reads naturally. Any other top-level key is
/// rejected rather than read as a missing section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Assessment {
    #[serde(rename = "contentBaseline", skip_serializing_if = "Option::is_none")]
    pub baseline: Option<AnswerRecord>,
    #[serde(rename = "workloadAssessment", skip_serializing_if = "Option::is_none")]
    pub workload: Option<AnswerRecord>,
    #[serde(rename = "repurposingCalculator", skip_serializing_if = "Option::is_none")]
    pub repurposing: Option<AnswerRecord>,
    #[serde(rename = "roiProjector", skip_serializing_if = "Option::is_none")]
    pub roi: Option<AnswerRecord>,
    #[serde(rename = "timeEstimator", skip_serializing_if = "Option::is_none")]
    pub time: Option<AnswerRecord>,
}

impl Assessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers recorded for a section, if it has been touched
    pub fn section(&self, section: Section) -> Option<&AnswerRecord> {
        self.slot(section).as_ref()
    }

    /// Replace a section's answers wholesale
    pub fn set_section(&mut self, section: Section, answers: AnswerRecord) {
        *self.slot_mut(section) = Some(answers);
    }

    /// Record one answer, creating the section on first touch
    pub fn answer(
        &mut self,
        section: Section,
        question_id: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<(), DomainError> {
        section.question(question_id)?;
        self.slot_mut(section)
            .get_or_insert_with(AnswerRecord::new)
            .set(question_id, value);
        Ok(())
    }

    /// Forget a section entirely
    pub fn reset_section(&mut self, section: Section) {
        *self.slot_mut(section) = None;
    }

    /// Current report for a touched section
    pub fn report(&self, section: Section) -> Option<SectionReport> {
        self.section(section).map(|answers| section.evaluate(answers))
    }

    /// Whether every section key is present.
    ///
    /// Only presence is checked, not whether each question inside a section
    /// was answered. A section with a single answer counts as done.
    pub fn is_complete(&self) -> bool {
        Section::ALL.iter().all(|s| self.section(*s).is_some())
    }

    /// Sections not yet touched, in assessment order
    pub fn missing_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.section(*s).is_none())
            .collect()
    }

    /// Summary totals, available once the assessment is complete
    pub fn summary(&self) -> Option<SummaryMetrics> {
        self.is_complete().then(|| calculate_summary_metrics(self))
    }

    /// Summary totals, or an error naming the sections still missing
    pub fn require_summary(&self) -> Result<SummaryMetrics, DomainError> {
        self.summary().ok_or_else(|| {
            DomainError::IncompleteAssessment(
                self.missing_sections()
                    .into_iter()
                    .map(|s| s.key().to_string())
                    .collect(),
            )
        })
    }

    fn slot(&self, section: Section) -> &Option<AnswerRecord> {
        match section {
            Section::Baseline => &self.baseline,
            Section::Workload => &self.workload,
            Section::Repurposing => &self.repurposing,
            Section::Roi => &self.roi,
            Section::Time => &self.time,
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut Option<AnswerRecord> {
        match section {
            Section::Baseline => &mut self.baseline,
            Section::Workload => &mut self.workload,
            Section::Repurposing => &mut self.repurposing,
            Section::Roi => &mut self.roi,
            Section::Time => &mut self.time,
        }
    }
}
