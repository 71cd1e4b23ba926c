//! Assessment sections
//!
//! The assessment is split into five independent sections. Each one owns its
//! own questions, research sources and calculator; no section reads another
//! section's answers.
//!
//! | Section       | Key                     | Calculator                              |
//! |---------------|-------------------------|-----------------------------------------|
//! | `Baseline`    | `contentBaseline`       | [`calculate_baseline_metrics`]          |
//! | `Workload`    | `workloadAssessment`    | [`calculate_stress_metrics`]            |
//! | `Repurposing` | `repurposingCalculator` | [`calculate_multiplication_metrics`]    |
//! | `Roi`         | `roiProjector`          | [`calculate_roi_metrics`]               |
//! | `Time`        | `timeEstimator`         | [`calculate_time_savings_metrics`]      |
//!
//! [`calculate_baseline_metrics`]: crate::calculator::calculate_baseline_metrics
//! [`calculate_stress_metrics`]: crate::calculator::calculate_stress_metrics
//! [`calculate_multiplication_metrics`]: crate::calculator::calculate_multiplication_metrics
//! [`calculate_roi_metrics`]: crate::calculator::calculate_roi_metrics
//! [`calculate_time_savings_metrics`]: crate::calculator::calculate_time_savings_metrics

pub mod catalog;
pub mod question;

pub use catalog::Source;
pub use question::{Question, QuestionKind};

use crate::answer::AnswerRecord;
use crate::calculator::{
    SectionReport, calculate_baseline_metrics, calculate_multiplication_metrics,
    calculate_roi_metrics, calculate_stress_metrics, calculate_time_savings_metrics,
};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the five assessment steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "contentBaseline")]
    Baseline,
    #[serde(rename = "workloadAssessment")]
    Workload,
    #[serde(rename = "repurposingCalculator")]
    Repurposing,
    #[serde(rename = "roiProjector")]
    Roi,
    #[serde(rename = "timeEstimator")]
    Time,
}

impl Section {
    /// All sections in assessment order
    pub const ALL: [Section; 5] = [
        Section::Baseline,
        Section::Workload,
        Section::Repurposing,
        Section::Roi,
        Section::Time,
    ];

    /// Stable key used in answer files and event logs
    pub fn key(self) -> &'static str {
        match self {
            Section::Baseline => "contentBaseline",
            Section::Workload => "workloadAssessment",
            Section::Repurposing => "repurposingCalculator",
            Section::Roi => "roiProjector",
            Section::Time => "timeEstimator",
        }
    }

    /// Short name accepted on the command line
    pub fn short_name(self) -> &'static str {
        match self {
            Section::Baseline => "baseline",
            Section::Workload => "workload",
            Section::Repurposing => "repurposing",
            Section::Roi => "roi",
            Section::Time => "time",
        }
    }

    /// 1-based position in the assessment
    pub fn step(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }

    pub fn title(self) -> &'static str {
        catalog::title(self)
    }

    pub fn description(self) -> &'static str {
        catalog::description(self)
    }

    pub fn questions(self) -> &'static [Question] {
        catalog::questions(self)
    }

    pub fn sources(self) -> &'static [Source] {
        catalog::sources(self)
    }

    /// Look up a question of this section by id
    pub fn question(self, id: &str) -> Result<&'static Question, DomainError> {
        self.questions()
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| DomainError::UnknownQuestion {
                section: self.key().to_string(),
                question: id.to_string(),
            })
    }

    /// Run this section's calculator over its answers
    pub fn evaluate(self, answers: &AnswerRecord) -> SectionReport {
        match self {
            Section::Baseline => calculate_baseline_metrics(answers).into(),
            Section::Workload => calculate_stress_metrics(answers).into(),
            Section::Repurposing => calculate_multiplication_metrics(answers).into(),
            Section::Roi => calculate_roi_metrics(answers).into(),
            Section::Time => calculate_time_savings_metrics(answers).into(),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| {
                section.key().eq_ignore_ascii_case(needle)
                    || section.short_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_names() {
        assert_eq!("roi".parse::<Section>().ok(), Some(Section::Roi));
        assert_eq!("timeEstimator".parse::<Section>().ok(), Some(Section::Time));
        assert_eq!("WORKLOAD".parse::<Section>().ok(), Some(Section::Workload));
        assert!("summary".parse::<Section>().is_err());
    }

    #[test]
    fn test_serde_uses_section_keys() {
        let json = serde_json::to_string(&Section::Repurposing).unwrap();
        assert_eq!(json, "\"repurposingCalculator\"");
        let parsed: Section = serde_json::from_str("\"contentBaseline\"").unwrap();
        assert_eq!(parsed, Section::Baseline);
    }

    #[test]
    fn test_steps_follow_order() {
        let steps: Vec<usize> = Section::ALL.iter().map(|s| s.step()).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_every_section_has_three_questions_and_sources() {
        for section in Section::ALL {
            assert_eq!(section.questions().len(), 3, "{section}");
            assert_eq!(section.sources().len(), 3, "{section}");
        }
    }

    #[test]
    fn test_unknown_question() {
        let err = Section::Roi.question("teamSize").unwrap_err();
        assert!(matches!(err, DomainError::UnknownQuestion { .. }));
        assert!(Section::Time.question("teamSize").is_ok());
    }

    #[test]
    fn test_evaluate_dispatches_to_calculator() {
        let answers = AnswerRecord::new()
            .with("adaptationTime", 10.0)
            .with("teamSize", 3.0)
            .with("hourlyRate", 50.0);
        let report = Section::Time.evaluate(&answers);
        assert_eq!(report.metric("Potential Hours Saved").unwrap().as_number(), Some(71.0));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let answers = AnswerRecord::new().with("stressLevel", 4.0);
        for section in Section::ALL {
            assert_eq!(section.evaluate(&answers), section.evaluate(&answers));
        }
    }
}
