//! Console output formatter for assessment results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use socialflip_domain::{
    Assessment, AssessmentReport, ImpactLevel, LeadValidationError, Question, QuestionKind,
    Section, SectionReport, SummaryMetrics, Tone,
};

/// Formats assessment results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// "Step 2 of 5: ..." banner with the section description
    pub fn section_intro(section: Section) -> String {
        format!(
            "{}{}\n",
            Self::section_header(&format!(
                "Step {} of {}: {}",
                section.step(),
                Section::ALL.len(),
                section.title()
            )),
            section.description().dimmed()
        )
    }

    /// Prompt text for one question, listing the options for choice questions
    pub fn question_prompt(question: &Question) -> String {
        let mut out = format!("{}\n", question.text.bold());
        match question.kind {
            QuestionKind::Number => {}
            QuestionKind::Scale => {
                out.push_str(&format!("  {}\n", "1 = rarely ... 5 = constantly".dimmed()));
            }
            QuestionKind::Select(options) | QuestionKind::MultiSelect(options) => {
                for (i, option) in options.iter().enumerate() {
                    out.push_str(&format!("  {}. {}\n", i + 1, option));
                }
                if matches!(question.kind, QuestionKind::MultiSelect(_)) {
                    out.push_str(&format!(
                        "  {}\n",
                        "(comma-separated names or numbers)".dimmed()
                    ));
                }
            }
        }
        out
    }

    /// Research statistics shown under a section
    pub fn sources(section: Section) -> String {
        let mut out = format!("\n{}\n", "Industry insights:".cyan().bold());
        for source in section.sources() {
            out.push_str(&format!(
                "  * {} {}\n",
                source.fact,
                format!("({}, {})", source.citation, source.link).dimmed()
            ));
        }
        out
    }

    /// Headline figures with their impact labels
    pub fn summary(summary: &SummaryMetrics) -> String {
        let mut out = Self::header("Your Content Optimization Potential");
        out.push('\n');

        let rows: [(&str, String, Tone, Option<ImpactLevel>); 6] = [
            (
                "Time Recovered Monthly",
                format!("{} hours", fmt(summary.time_recovered)),
                summary.time_tone(),
                Some(ImpactLevel::for_time(summary.time_recovered)),
            ),
            (
                "Productivity Value",
                format!("${}", fmt(summary.productivity_value)),
                summary.productivity_tone(),
                None,
            ),
            (
                "Additional Content Generated",
                format!("{} pieces", fmt(summary.content_generated)),
                summary.content_tone(),
                None,
            ),
            (
                "Cost Reduction",
                format!("{}%", fmt(summary.cost_reduction)),
                summary.cost_tone(),
                Some(ImpactLevel::for_cost(summary.cost_reduction)),
            ),
            (
                "Stress Reduction",
                format!("{}%", fmt(summary.stress_reduction)),
                summary.stress_tone(),
                Some(ImpactLevel::for_stress(summary.stress_reduction)),
            ),
            (
                "Additional Monthly Revenue",
                format!("${}", fmt(summary.revenue_potential)),
                summary.revenue_tone(),
                None,
            ),
        ];

        for (label, value, tone, impact) in rows {
            out.push_str(&format!("  {:<30} {}", label, paint(&value, tone).bold()));
            if let Some(impact) = impact {
                out.push_str(&format!("  {}", impact.label().dimmed()));
            }
            out.push('\n');
        }

        out.push_str(&Self::footer());
        out
    }

    /// Inline field errors for the registration form
    pub fn lead_errors(errors: &[LeadValidationError]) -> String {
        errors
            .iter()
            .map(|e| format!("  {} {}\n", "!".red().bold(), e.to_string().red()))
            .collect()
    }

    /// One line of current metrics shown right after each accepted answer,
    /// followed by any warnings that fire
    pub fn live_metrics(report: &SectionReport) -> String {
        let metrics: Vec<String> = report
            .metrics
            .iter()
            .map(|m| format!("{}: {}", m.label, paint(&m.display_value(), m.tone).bold()))
            .collect();
        let mut out = format!("  {} {}\n", "↳".dimmed(), metrics.join(" | "));
        for warning in &report.warnings {
            out.push_str(&format!("  {} {}\n", "⚠".yellow(), warning.yellow()));
        }
        out
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.magenta(), title.bold(), line.magenta())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.magenta().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).magenta())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn section(&self, section: Section, report: &SectionReport) -> String {
        let mut out = format!("\n{}\n", section.title().cyan().bold());
        for metric in &report.metrics {
            out.push_str(&format!(
                "  {:<24} {}\n",
                metric.label,
                paint(&metric.display_value(), metric.tone).bold()
            ));
        }
        for warning in &report.warnings {
            out.push_str(&format!("  {} {}\n", "⚠".yellow(), warning.yellow()));
        }
        out
    }

    fn assessment(&self, assessment: &Assessment) -> String {
        let mut out = String::new();
        for section in Section::ALL {
            if let Some(report) = assessment.report(section) {
                out.push_str(&self.section(section, &report));
            }
        }
        out.push('\n');

        match assessment.summary() {
            Some(summary) => out.push_str(&Self::summary(&summary)),
            None => {
                let missing: Vec<&str> = assessment
                    .missing_sections()
                    .iter()
                    .map(|s| s.title())
                    .collect();
                out.push_str(&format!(
                    "{} {}\n",
                    "Summary unavailable, still to answer:".yellow().bold(),
                    missing.join(", ")
                ));
            }
        }
        out
    }

    fn report(&self, report: &AssessmentReport) -> String {
        report.to_plain_text()
    }
}

fn fmt(value: f64) -> String {
    socialflip_domain::core::number::format_number(value)
}

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Green => text.green(),
        Tone::Emerald => text.bright_green(),
        Tone::Blue => text.blue(),
        Tone::Yellow => text.yellow(),
        Tone::Red => text.red(),
        Tone::Purple => text.magenta(),
        Tone::Neutral => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialflip_domain::AnswerRecord;

    #[test]
    fn test_section_lists_metrics_and_warnings() {
        let answers = AnswerRecord::new()
            .with("stressLevel", 5.0)
            .with("platforms", vec!["Blog", "Instagram", "LinkedIn", "YouTube", "TikTok"])
            .with("overtime", "Always");
        let report = Section::Workload.evaluate(&answers);

        let out = ConsoleFormatter.section(Section::Workload, &report);

        assert!(out.contains("Stress Level"));
        assert!(out.contains("Platform Load"));
        assert!(out.contains("High risk of burnout due to frequent overtime work"));
    }

    #[test]
    fn test_live_metrics_on_one_line() {
        colored::control::set_override(false);
        let answers = AnswerRecord::new()
            .with("stressLevel", 5.0)
            .with("overtime", "Always");
        let report = Section::Workload.evaluate(&answers);

        let out = ConsoleFormatter::live_metrics(&report);
        let first = out.lines().next().unwrap();

        for metric in &report.metrics {
            assert!(first.contains(&format!("{}: {}", metric.label, metric.display_value())));
        }
        assert!(out.contains("High risk of burnout due to frequent overtime work"));
        assert_eq!(out.lines().count(), 1 + report.warnings.len());
    }

    #[test]
    fn test_summary_shows_impact_labels() {
        let summary = SummaryMetrics {
            time_recovered: 40.0,
            productivity_value: 2000.0,
            content_generated: 84.0,
            cost_reduction: 60.0,
            stress_reduction: 80.0,
            revenue_potential: 100000.0,
        };

        let out = ConsoleFormatter::summary(&summary);

        assert!(out.contains("$100,000"));
        assert!(out.contains("Medium Impact"));
        assert!(out.contains("Major Savings"));
        assert!(out.contains("Transformative"));
    }

    #[test]
    fn test_incomplete_assessment_lists_missing_steps() {
        let mut assessment = Assessment::new();
        assessment.set_section(Section::Baseline, AnswerRecord::new());

        let out = ConsoleFormatter.assessment(&assessment);

        assert!(out.contains("Summary unavailable"));
        assert!(out.contains(Section::Time.title()));
    }

    #[test]
    fn test_question_prompt_lists_options() {
        let question = Section::Workload.question("overtime").unwrap();
        let out = ConsoleFormatter::question_prompt(question);
        assert!(out.contains("1. Never"));
        assert!(out.contains("5. Always"));
    }

    #[test]
    fn test_lead_errors() {
        let out = ConsoleFormatter::lead_errors(&[LeadValidationError::EmailRequired]);
        assert!(out.contains("Email is required"));
    }
}
