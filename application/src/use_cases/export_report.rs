//! Export report use case
//!
//! Builds an [`AssessmentReport`] from a complete assessment and hands it to
//! the [`ReportExporter`]. Incomplete assessments are refused.

use crate::config::ReportSettings;
use crate::ports::event_logger::{AssessmentEvent, AssessmentEventLogger, NoEventLogger};
use crate::ports::report_exporter::{ExportError, ReportExporter};
use chrono::{Local, NaiveDate};
use serde_json::json;
use socialflip_domain::{Assessment, AssessmentReport, DomainError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// US-style month/day/year, e.g. `10/18/2026`
const DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Error, Debug)]
pub enum ExportReportError {
    #[error(transparent)]
    Incomplete(#[from] DomainError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Debug, Clone)]
pub struct ExportReportOutput {
    pub path: PathBuf,
    pub report: AssessmentReport,
}

pub struct ExportReportUseCase {
    exporter: Arc<dyn ReportExporter>,
    settings: ReportSettings,
    event_logger: Arc<dyn AssessmentEventLogger>,
}

impl ExportReportUseCase {
    pub fn new(exporter: Arc<dyn ReportExporter>, settings: ReportSettings) -> Self {
        Self {
            exporter,
            settings,
            event_logger: Arc::new(NoEventLogger),
        }
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn AssessmentEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    /// Build the report without writing it
    pub fn build_report(
        &self,
        assessment: &Assessment,
        generated_on: NaiveDate,
    ) -> Result<AssessmentReport, ExportReportError> {
        let summary = assessment.require_summary()?;
        Ok(AssessmentReport::new(
            summary,
            generated_on.format(DATE_FORMAT).to_string(),
            self.settings.booking_url.clone(),
        ))
    }

    /// Export dated today, to `path` or the configured default
    pub fn execute(
        &self,
        assessment: &Assessment,
        path: Option<&Path>,
    ) -> Result<ExportReportOutput, ExportReportError> {
        self.execute_on(assessment, path, Local::now().date_naive())
    }

    pub fn execute_on(
        &self,
        assessment: &Assessment,
        path: Option<&Path>,
        generated_on: NaiveDate,
    ) -> Result<ExportReportOutput, ExportReportError> {
        let report = self.build_report(assessment, generated_on)?;
        let target = path.unwrap_or(self.settings.output_path.as_path());

        let written = self.exporter.export(&report, target)?;
        info!("Report written to {}", written.display());

        self.event_logger.log(AssessmentEvent::new(
            "report_exported",
            json!({ "path": written.display().to_string() }),
        ));

        Ok(ExportReportOutput {
            path: written,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialflip_domain::{AnswerRecord, Section};
    use std::sync::Mutex;

    struct MockExporter {
        written: Mutex<Vec<(PathBuf, AssessmentReport)>>,
        fail: bool,
    }

    impl MockExporter {
        fn new(fail: bool) -> Self {
            Self {
                written: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl ReportExporter for MockExporter {
        fn export(&self, report: &AssessmentReport, path: &Path) -> Result<PathBuf, ExportError> {
            if self.fail {
                return Err(ExportError::Render("boom".to_string()));
            }
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), report.clone()));
            Ok(path.to_path_buf())
        }
    }

    fn complete_assessment() -> Assessment {
        let mut assessment = Assessment::new();
        for section in Section::ALL {
            assessment.set_section(section, AnswerRecord::new());
        }
        assessment.set_section(
            Section::Time,
            AnswerRecord::new()
                .with("adaptationTime", 10.0)
                .with("teamSize", 3.0)
                .with("hourlyRate", 50.0),
        );
        assessment
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_incomplete_assessment_is_refused() {
        let exporter = Arc::new(MockExporter::new(false));
        let use_case = ExportReportUseCase::new(exporter.clone(), ReportSettings::default());

        let err = use_case
            .execute_on(&Assessment::new(), None, date())
            .unwrap_err();

        assert!(matches!(
            err,
            ExportReportError::Incomplete(DomainError::IncompleteAssessment(_))
        ));
        assert!(exporter.written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_export_uses_default_path_and_date() {
        let exporter = Arc::new(MockExporter::new(false));
        let use_case = ExportReportUseCase::new(exporter.clone(), ReportSettings::default());

        let output = use_case
            .execute_on(&complete_assessment(), None, date())
            .unwrap();

        assert_eq!(output.path, PathBuf::from("socialflip-assessment-report.pdf"));
        assert_eq!(output.report.generated_on, "3/7/2026");
        assert_eq!(output.report.metrics[0].value, "40 hours");
        assert_eq!(exporter.written.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_explicit_path_and_booking_url() {
        let exporter = Arc::new(MockExporter::new(false));
        let settings = ReportSettings::default().with_booking_url("https://example.com/call");
        let use_case = ExportReportUseCase::new(exporter, settings);

        let output = use_case
            .execute_on(&complete_assessment(), Some(Path::new("out/report.pdf")), date())
            .unwrap();

        assert_eq!(output.path, PathBuf::from("out/report.pdf"));
        assert_eq!(output.report.booking_url, "https://example.com/call");
    }

    #[test]
    fn test_exporter_failure_propagates() {
        let use_case =
            ExportReportUseCase::new(Arc::new(MockExporter::new(true)), ReportSettings::default());

        let err = use_case
            .execute_on(&complete_assessment(), None, date())
            .unwrap_err();

        assert!(matches!(err, ExportReportError::Export(ExportError::Render(_))));
    }
}
