//! Assessment report document model
//!
//! Renderers (PDF, console) consume [`AssessmentReport`]; the wording and
//! number formatting live here so every renderer prints the same figures.

use crate::assessment::SummaryMetrics;
use crate::core::number::format_number;
use serde::Serialize;

pub const BRAND_NAME: &str = "SocialFlip.io";
pub const DEFAULT_BOOKING_URL: &str =
    "https://calendly.com/rockey-repurposly/social-flip-discovery-call";

const TITLE: [&str; 2] = ["Content Repurposing", "Assessment Report"];
const METRICS_HEADING: &str = "Your Content Optimization Potential";
const RECOMMENDATIONS_HEADING: &str = "Key Recommendations";
const CALL_TO_ACTION: &str = "Book Your Free Discovery Call";
const FOOTER: &str = "Generated by SocialFlip.io - Your Content Repurposing Partner";

pub const RECOMMENDATIONS: [&str; 5] = [
    "Implement a content repurposing strategy to maximize existing content",
    "Use automation tools to reduce manual content adaptation time",
    "Focus on high-performing content formats for better ROI",
    "Streamline your content workflow to reduce team stress",
    "Regularly measure and adjust your content strategy based on metrics",
];

/// One `label: value` line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

/// Fully worded report, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub brand: &'static str,
    pub title: [&'static str; 2],
    pub generated_on: String,
    pub metrics_heading: &'static str,
    pub metrics: Vec<ReportLine>,
    pub recommendations_heading: &'static str,
    pub recommendations: Vec<String>,
    pub call_to_action: &'static str,
    pub booking_url: String,
    pub footer: &'static str,
    pub summary: SummaryMetrics,
}

impl AssessmentReport {
    pub fn new(
        summary: SummaryMetrics,
        generated_on: impl Into<String>,
        booking_url: impl Into<String>,
    ) -> Self {
        Self {
            brand: BRAND_NAME,
            title: TITLE,
            generated_on: generated_on.into(),
            metrics_heading: METRICS_HEADING,
            metrics: metric_lines(&summary),
            recommendations_heading: RECOMMENDATIONS_HEADING,
            recommendations: RECOMMENDATIONS
                .iter()
                .enumerate()
                .map(|(i, text)| format!("{}. {}", i + 1, text))
                .collect(),
            call_to_action: CALL_TO_ACTION,
            booking_url: booking_url.into(),
            footer: FOOTER,
            summary,
        }
    }

    /// Plain-text rendering, one line per entry
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n\n", self.brand));
        out.push_str(&format!("{}\n", self.title.join(" ")));
        out.push_str(&format!("Generated on: {}\n\n", self.generated_on));
        out.push_str(&format!("{}\n", self.metrics_heading));
        for line in &self.metrics {
            out.push_str(&format!("  {} {}\n", line.label, line.value));
        }
        out.push_str(&format!("\n{}\n", self.recommendations_heading));
        for rec in &self.recommendations {
            out.push_str(&format!("  {}\n", rec));
        }
        out.push_str(&format!("\n{}: {}\n", self.call_to_action, self.booking_url));
        out.push_str(&format!("\n{}\n", self.footer));
        out
    }
}

fn metric_lines(summary: &SummaryMetrics) -> Vec<ReportLine> {
    let line = |label, value| ReportLine { label, value };
    vec![
        line(
            "Time Recovered Monthly:",
            format!("{} hours", format_number(summary.time_recovered)),
        ),
        line(
            "Productivity Value:",
            format!("${}", format_number(summary.productivity_value)),
        ),
        line(
            "Additional Content Generated:",
            format!("{} pieces", format_number(summary.content_generated)),
        ),
        line(
            "Cost Reduction:",
            format!("{}%", format_number(summary.cost_reduction)),
        ),
        line(
            "Stress Reduction:",
            format!("{}%", format_number(summary.stress_reduction)),
        ),
        line(
            "Additional Monthly Revenue:",
            format!("${}", format_number(summary.revenue_potential)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SummaryMetrics {
        SummaryMetrics {
            time_recovered: 40.0,
            productivity_value: 2000.0,
            content_generated: 84.0,
            cost_reduction: 60.0,
            stress_reduction: 80.0,
            revenue_potential: 100000.0,
        }
    }

    #[test]
    fn test_metric_lines() {
        let report = AssessmentReport::new(summary(), "2026-10-18", DEFAULT_BOOKING_URL);
        let values: Vec<&str> = report.metrics.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["40 hours", "$2,000", "84 pieces", "60%", "80%", "$100,000"]
        );
    }

    #[test]
    fn test_recommendations_are_numbered() {
        let report = AssessmentReport::new(summary(), "2026-10-18", DEFAULT_BOOKING_URL);
        assert_eq!(report.recommendations.len(), 5);
        assert!(report.recommendations[0].starts_with("1. Implement"));
        assert!(report.recommendations[4].starts_with("5. Regularly"));
    }

    #[test]
    fn test_plain_text_contains_everything() {
        let report = AssessmentReport::new(summary(), "2026-10-18", "https://example.com/book");
        let text = report.to_plain_text();
        assert!(text.contains("Generated on: 2026-10-18"));
        assert!(text.contains("Additional Monthly Revenue: $100,000"));
        assert!(text.contains("Book Your Free Discovery Call: https://example.com/book"));
        assert!(text.ends_with(&format!("{}\n", FOOTER)));
    }
}
