//! Assessment session
//!
//! [`AssessmentSession`] owns the in-progress [`Assessment`] and recomputes
//! the affected section after every change. The summary becomes available
//! as soon as all five sections have been touched.

use crate::ports::event_logger::{AssessmentEvent, AssessmentEventLogger, NoEventLogger};
use serde_json::json;
use socialflip_domain::{
    AnswerRecord, AnswerValue, Assessment, DomainError, Section, SectionReport, SummaryMetrics,
};
use std::sync::Arc;
use tracing::{debug, info};

pub struct AssessmentSession {
    assessment: Assessment,
    event_logger: Arc<dyn AssessmentEventLogger>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::from_assessment(Assessment::new())
    }

    /// Resume from previously collected answers (e.g. an answers file)
    pub fn from_assessment(assessment: Assessment) -> Self {
        Self {
            assessment,
            event_logger: Arc::new(NoEventLogger),
        }
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn AssessmentEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn into_assessment(self) -> Assessment {
        self.assessment
    }

    /// Store one answer and return the recomputed section report
    pub fn answer(
        &mut self,
        section: Section,
        question_id: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<SectionReport, DomainError> {
        let was_complete = self.assessment.is_complete();
        let value = value.into();

        self.assessment.answer(section, question_id, value.clone())?;
        self.event_logger.log(AssessmentEvent::new(
            "answer",
            json!({
                "section": section.key(),
                "question": question_id,
                "value": value,
            }),
        ));

        Ok(self.recompute(section, was_complete))
    }

    /// Replace a whole section's answers
    pub fn replace(&mut self, section: Section, answers: AnswerRecord) -> SectionReport {
        let was_complete = self.assessment.is_complete();
        self.assessment.set_section(section, answers);
        self.recompute(section, was_complete)
    }

    pub fn report(&self, section: Section) -> Option<SectionReport> {
        self.assessment.report(section)
    }

    pub fn summary(&self) -> Option<SummaryMetrics> {
        self.assessment.summary()
    }

    pub fn is_complete(&self) -> bool {
        self.assessment.is_complete()
    }

    pub fn missing_sections(&self) -> Vec<Section> {
        self.assessment.missing_sections()
    }

    fn recompute(&self, section: Section, was_complete: bool) -> SectionReport {
        let report = self
            .assessment
            .section(section)
            .map(|answers| section.evaluate(answers))
            .unwrap_or_default();

        debug!(
            "Recomputed {} ({} metrics, {} warnings)",
            section.key(),
            report.metrics.len(),
            report.warnings.len()
        );
        self.event_logger.log(AssessmentEvent::new(
            "section_report",
            json!({ "section": section.key(), "report": report }),
        ));

        if !was_complete && let Some(summary) = self.assessment.summary() {
            info!("All sections answered, summary available");
            self.event_logger.log(AssessmentEvent::new(
                "summary",
                json!({ "summary": summary }),
            ));
        }

        report
    }
}
