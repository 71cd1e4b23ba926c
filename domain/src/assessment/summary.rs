//! Cross-section summary totals
//!
//! The summary combines the baseline, workload, ROI and time sections. The
//! repurposing section's answers are collected but not consumed here.

use super::Assessment;
use crate::answer::AnswerRecord;
use crate::calculator::baseline::{COST_PER_PIECE, MONTHLY_CONTENT, WEEKLY_HOURS};
use crate::calculator::roi::{MONTHLY_LEADS, REVENUE_PER_PIECE};
use crate::calculator::stress::STRESS_LEVEL;
use crate::calculator::time_savings::{ADAPTATION_TIME, HOURLY_RATE, TEAM_SIZE, WEEKS_PER_MONTH};
use crate::core::number::{finite_or_zero, round_half_up};
use crate::metric::Tone;
use serde::{Deserialize, Serialize};

/// Fraction of the current cost expected to remain after optimization
const REDUCED_COST_SHARE: f64 = 0.4;
/// Extra pieces generated per original piece
const PIECES_PER_ORIGINAL: f64 = 7.0;
/// Weeks counted when turning weekly adaptation time into recovered hours
const RECOVERED_WEEKS: f64 = 4.0;

/// The six headline figures of a completed assessment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    /// Hours recovered per month
    pub time_recovered: f64,
    /// Dollar value of the recovered time
    pub productivity_value: f64,
    /// Additional pieces of content per month
    pub content_generated: f64,
    /// Cost reduction in percent
    pub cost_reduction: f64,
    /// Stress reduction in percent
    pub stress_reduction: f64,
    /// Additional monthly revenue in dollars
    pub revenue_potential: f64,
}

/// Compute the summary from whatever sections are present.
///
/// Missing sections read as empty records. The cost-reduction formula is
/// kept exactly as the figures have always been produced, including the
/// `monthlyHours / monthlyContent` term that cancels out. With
/// `monthlyContent == 0` that term is NaN, the `current > 0` guard fails and
/// the reduction reports 0 even if a team cost exists.
pub fn calculate_summary_metrics(assessment: &Assessment) -> SummaryMetrics {
    let empty = AnswerRecord::new();
    let baseline = assessment.baseline.as_ref().unwrap_or(&empty);
    let workload = assessment.workload.as_ref().unwrap_or(&empty);
    let roi = assessment.roi.as_ref().unwrap_or(&empty);
    let time = assessment.time.as_ref().unwrap_or(&empty);

    let monthly_hours = baseline.number(WEEKLY_HOURS) * WEEKS_PER_MONTH;
    let monthly_pieces = baseline.number(MONTHLY_CONTENT);
    let cost_per_piece = baseline.number(COST_PER_PIECE);

    let adaptation_time = time.number(ADAPTATION_TIME);
    let hourly_rate = time.number(HOURLY_RATE);
    let team_size = time.number(TEAM_SIZE);

    let current_monthly_investment =
        monthly_pieces * (monthly_hours / monthly_pieces) * cost_per_piece;
    let team_cost = hourly_rate * team_size * adaptation_time;
    let total_current_cost = current_monthly_investment + team_cost;

    let reduced_cost = total_current_cost * REDUCED_COST_SHARE;
    let cost_reduction = if total_current_cost > 0.0 {
        round_half_up((total_current_cost - reduced_cost) / total_current_cost * 100.0)
    } else {
        0.0
    };

    SummaryMetrics {
        time_recovered: finite_or_zero(adaptation_time * RECOVERED_WEEKS),
        productivity_value: finite_or_zero(hourly_rate * adaptation_time * RECOVERED_WEEKS),
        content_generated: finite_or_zero(monthly_pieces * PIECES_PER_ORIGINAL),
        cost_reduction: finite_or_zero(cost_reduction),
        stress_reduction: finite_or_zero(workload.number(STRESS_LEVEL) * 20.0),
        revenue_potential: finite_or_zero(
            roi.number(REVENUE_PER_PIECE) * roi.number(MONTHLY_LEADS) * 2.0,
        ),
    }
}

/// Qualitative impact label for a summary figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    HighImpact,
    MediumImpact,
    NotableImpact,
    MajorSavings,
    GoodSavings,
    ModerateSavings,
    Transformative,
    Significant,
    Positive,
}

impl ImpactLevel {
    /// Impact of the hours recovered per month
    pub fn for_time(hours: f64) -> Self {
        if hours > 40.0 {
            ImpactLevel::HighImpact
        } else if hours > 20.0 {
            ImpactLevel::MediumImpact
        } else {
            ImpactLevel::NotableImpact
        }
    }

    /// Impact of the cost reduction percentage
    pub fn for_cost(percent: f64) -> Self {
        if percent > 50.0 {
            ImpactLevel::MajorSavings
        } else if percent > 30.0 {
            ImpactLevel::GoodSavings
        } else {
            ImpactLevel::ModerateSavings
        }
    }

    /// Impact of the stress reduction percentage
    pub fn for_stress(percent: f64) -> Self {
        if percent > 60.0 {
            ImpactLevel::Transformative
        } else if percent > 40.0 {
            ImpactLevel::Significant
        } else {
            ImpactLevel::Positive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactLevel::HighImpact => "High Impact",
            ImpactLevel::MediumImpact => "Medium Impact",
            ImpactLevel::NotableImpact => "Notable Impact",
            ImpactLevel::MajorSavings => "Major Savings",
            ImpactLevel::GoodSavings => "Good Savings",
            ImpactLevel::ModerateSavings => "Moderate Savings",
            ImpactLevel::Transformative => "Transformative",
            ImpactLevel::Significant => "Significant",
            ImpactLevel::Positive => "Positive",
        }
    }
}

impl SummaryMetrics {
    /// Tone for a figure already scaled to a 0–100ish range
    pub fn tone_for(scaled: f64) -> Tone {
        if scaled > 60.0 {
            Tone::Green
        } else if scaled > 40.0 {
            Tone::Blue
        } else {
            Tone::Yellow
        }
    }

    pub fn time_tone(&self) -> Tone {
        Self::tone_for(self.time_recovered)
    }

    pub fn productivity_tone(&self) -> Tone {
        Self::tone_for(self.productivity_value / 1000.0)
    }

    pub fn content_tone(&self) -> Tone {
        Self::tone_for(self.content_generated / 10.0)
    }

    pub fn cost_tone(&self) -> Tone {
        Self::tone_for(self.cost_reduction)
    }

    pub fn stress_tone(&self) -> Tone {
        Self::tone_for(self.stress_reduction)
    }

    pub fn revenue_tone(&self) -> Tone {
        Self::tone_for(self.revenue_potential / 5000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;

    fn complete_assessment() -> Assessment {
        let mut assessment = Assessment::new();
        assessment.set_section(
            Section::Baseline,
            AnswerRecord::new()
                .with(WEEKLY_HOURS, "20")
                .with(COST_PER_PIECE, "150")
                .with(MONTHLY_CONTENT, "12"),
        );
        assessment.set_section(
            Section::Workload,
            AnswerRecord::new().with(STRESS_LEVEL, 4.0),
        );
        assessment.set_section(
            Section::Repurposing,
            AnswerRecord::new().with("primaryFormat", "Video"),
        );
        assessment.set_section(
            Section::Roi,
            AnswerRecord::new()
                .with(REVENUE_PER_PIECE, "500")
                .with(MONTHLY_LEADS, "100"),
        );
        assessment.set_section(
            Section::Time,
            AnswerRecord::new()
                .with(ADAPTATION_TIME, "10")
                .with(TEAM_SIZE, "3")
                .with(HOURLY_RATE, "50"),
        );
        assessment
    }

    #[test]
    fn test_summary_totals() {
        let summary = calculate_summary_metrics(&complete_assessment());
        assert_eq!(summary.time_recovered, 40.0);
        assert_eq!(summary.productivity_value, 2000.0);
        assert_eq!(summary.content_generated, 84.0);
        assert_eq!(summary.cost_reduction, 60.0);
        assert_eq!(summary.stress_reduction, 80.0);
        assert_eq!(summary.revenue_potential, 100000.0);
    }

    #[test]
    fn test_empty_assessment_is_all_zero() {
        let summary = calculate_summary_metrics(&Assessment::new());
        assert_eq!(summary, SummaryMetrics::default());
    }

    #[test]
    fn test_no_monthly_content_zeroes_cost_reduction_despite_team_cost() {
        let mut assessment = complete_assessment();
        assessment.set_section(
            Section::Baseline,
            AnswerRecord::new().with(WEEKLY_HOURS, "20"),
        );
        let summary = calculate_summary_metrics(&assessment);
        assert_eq!(summary.cost_reduction, 0.0);
        assert_eq!(summary.content_generated, 0.0);
        // Unrelated totals are unaffected
        assert_eq!(summary.time_recovered, 40.0);
    }

    #[test]
    fn test_team_cost_alone_still_reduces() {
        let mut assessment = complete_assessment();
        assessment.set_section(
            Section::Baseline,
            AnswerRecord::new().with(MONTHLY_CONTENT, "4"),
        );
        let summary = calculate_summary_metrics(&assessment);
        assert_eq!(summary.cost_reduction, 60.0);
    }

    #[test]
    fn test_repurposing_answers_do_not_affect_summary() {
        let base = complete_assessment();
        let mut changed = base.clone();
        changed.set_section(
            Section::Repurposing,
            AnswerRecord::new()
                .with("primaryFormat", "Podcast")
                .with("platforms", vec!["LinkedIn", "YouTube"])
                .with("repurposingRate", "76-100%"),
        );
        assert_eq!(
            calculate_summary_metrics(&base),
            calculate_summary_metrics(&changed)
        );
    }

    #[test]
    fn test_impact_levels() {
        assert_eq!(ImpactLevel::for_time(41.0), ImpactLevel::HighImpact);
        assert_eq!(ImpactLevel::for_time(40.0), ImpactLevel::MediumImpact);
        assert_eq!(ImpactLevel::for_time(20.0), ImpactLevel::NotableImpact);
        assert_eq!(ImpactLevel::for_cost(60.0), ImpactLevel::MajorSavings);
        assert_eq!(ImpactLevel::for_cost(31.0), ImpactLevel::GoodSavings);
        assert_eq!(ImpactLevel::for_stress(80.0), ImpactLevel::Transformative);
        assert_eq!(ImpactLevel::for_stress(60.0), ImpactLevel::Significant);
        assert_eq!(ImpactLevel::for_stress(0.0).label(), "Positive");
    }

    #[test]
    fn test_scaled_tones() {
        let summary = calculate_summary_metrics(&complete_assessment());
        assert_eq!(summary.time_tone(), Tone::Yellow);
        assert_eq!(summary.cost_tone(), Tone::Blue);
        assert_eq!(summary.stress_tone(), Tone::Green);
        // 100000 / 5000 = 20
        assert_eq!(summary.revenue_tone(), Tone::Yellow);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(SummaryMetrics::default()).unwrap();
        assert!(json.get("timeRecovered").is_some());
        assert!(json.get("revenuePotential").is_some());
    }

    #[test]
    fn test_idempotent() {
        let assessment = complete_assessment();
        assert_eq!(
            calculate_summary_metrics(&assessment),
            calculate_summary_metrics(&assessment)
        );
        assert_eq!(assessment.summary(), assessment.summary());
    }
}
