//! Content baseline: current investment in original content

use super::SectionReport;
use super::time_savings::WEEKS_PER_MONTH;
use crate::answer::AnswerRecord;
use crate::core::number::round_half_up;
use crate::metric::{Metric, Tone, Unit};
use serde::{Deserialize, Serialize};

pub const WEEKLY_HOURS: &str = "weeklyHours";
pub const COST_PER_PIECE: &str = "costPerPiece";
pub const MONTHLY_CONTENT: &str = "monthlyContent";

/// Output of [`calculate_baseline_metrics`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineMetrics {
    /// Rounded hours spent on original content per month
    pub monthly_hours: f64,
    /// `monthlyContent * costPerPiece`
    pub monthly_investment: f64,
    pub cost_per_piece: f64,
}

pub fn calculate_baseline_metrics(answers: &AnswerRecord) -> BaselineMetrics {
    let weekly_hours = answers.number(WEEKLY_HOURS);
    let monthly_pieces = answers.number(MONTHLY_CONTENT);
    let cost_per_piece = answers.number(COST_PER_PIECE);

    BaselineMetrics {
        monthly_hours: round_half_up(weekly_hours * WEEKS_PER_MONTH),
        monthly_investment: monthly_pieces * cost_per_piece,
        cost_per_piece,
    }
}

impl From<BaselineMetrics> for SectionReport {
    fn from(m: BaselineMetrics) -> Self {
        SectionReport::new(vec![
            Metric::number("Monthly Time Investment", m.monthly_hours, Unit::Hours, Tone::Blue),
            Metric::number("Monthly Content Cost", m.monthly_investment, Unit::Dollars, Tone::Green),
            Metric::number("Cost Per Piece", m.cost_per_piece, Unit::Dollars, Tone::Purple),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_investment() {
        let answers = AnswerRecord::new()
            .with(WEEKLY_HOURS, "20")
            .with(COST_PER_PIECE, "150")
            .with(MONTHLY_CONTENT, "12");
        let m = calculate_baseline_metrics(&answers);
        assert_eq!(m.monthly_hours, 87.0);
        assert_eq!(m.monthly_investment, 1800.0);
        assert_eq!(m.cost_per_piece, 150.0);

        let report: SectionReport = m.into();
        assert_eq!(report.metric("Monthly Time Investment").unwrap().display_value(), "87h");
        assert_eq!(report.metric("Monthly Content Cost").unwrap().display_value(), "$1,800");
    }

    #[test]
    fn test_empty_baseline() {
        let m = calculate_baseline_metrics(&AnswerRecord::new());
        assert_eq!(m.monthly_hours, 0.0);
        assert_eq!(m.monthly_investment, 0.0);
        assert_eq!(m.cost_per_piece, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let answers = AnswerRecord::new()
            .with(WEEKLY_HOURS, 12.5)
            .with(COST_PER_PIECE, 80.0)
            .with(MONTHLY_CONTENT, 9.0);
        assert_eq!(
            calculate_baseline_metrics(&answers),
            calculate_baseline_metrics(&answers)
        );
    }
}
