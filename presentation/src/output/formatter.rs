//! Output formatter trait

use crate::output::{console::ConsoleFormatter, json::JsonFormatter};
use socialflip_domain::{Assessment, AssessmentReport, OutputFormat, Section, SectionReport};

/// Trait for formatting assessment results
pub trait OutputFormatter {
    /// Format the metrics and warnings of one section
    fn section(&self, section: Section, report: &SectionReport) -> String;

    /// Format every answered section followed by the summary (or what is missing)
    fn assessment(&self, assessment: &Assessment) -> String;

    /// Format the worded report
    fn report(&self, report: &AssessmentReport) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
