//! JSON output

use crate::output::formatter::OutputFormatter;
use serde_json::{Map, Value, json};
use socialflip_domain::{Assessment, AssessmentReport, Section, SectionReport};

pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Sections keyed by their answer-file key, summary `null` until complete
    pub fn assessment_value(assessment: &Assessment) -> Value {
        let sections: Map<String, Value> = Section::ALL
            .iter()
            .filter_map(|section| {
                let report = assessment.report(*section)?;
                Some((section.key().to_string(), json!(report)))
            })
            .collect();

        json!({
            "sections": sections,
            "complete": assessment.is_complete(),
            "missing": assessment
                .missing_sections()
                .iter()
                .map(|s| s.key())
                .collect::<Vec<_>>(),
            "summary": assessment.summary(),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn section(&self, section: Section, report: &SectionReport) -> String {
        Self::pretty(&json!({ "section": section.key(), "report": report }))
    }

    fn assessment(&self, assessment: &Assessment) -> String {
        Self::pretty(&Self::assessment_value(assessment))
    }

    fn report(&self, report: &AssessmentReport) -> String {
        Self::pretty(&json!(report))
    }
}
