//! Content multiplication calculator (repurposing section)

use super::SectionReport;
use super::tables::{ContentFormat, RepurposingRate};
use crate::answer::AnswerRecord;
use crate::core::number::round_half_up;
use crate::metric::{Metric, Tone, Unit};
use serde::{Deserialize, Serialize};

pub const PRIMARY_FORMAT: &str = "primaryFormat";
pub const PLATFORMS: &str = "platforms";
pub const REPURPOSING_RATE: &str = "repurposingRate";

const MULTIPLIER_PER_PLATFORM: f64 = 1.5;

/// How much of the potential reach is already being used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilizationCategory {
    MajorOpportunity,
    GoodPotential,
    RoomForOptimization,
    MaximumEfficiency,
}

impl UtilizationCategory {
    /// Band a utilization percentage (0–100)
    pub fn from_rate(rate: f64) -> Self {
        if rate <= 25.0 {
            UtilizationCategory::MajorOpportunity
        } else if rate <= 50.0 {
            UtilizationCategory::GoodPotential
        } else if rate <= 75.0 {
            UtilizationCategory::RoomForOptimization
        } else {
            UtilizationCategory::MaximumEfficiency
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UtilizationCategory::MajorOpportunity => "Major Opportunity",
            UtilizationCategory::GoodPotential => "Good Potential",
            UtilizationCategory::RoomForOptimization => "Room for Optimization",
            UtilizationCategory::MaximumEfficiency => "Maximum Efficiency",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            UtilizationCategory::MajorOpportunity => Tone::Blue,
            UtilizationCategory::GoodPotential => Tone::Green,
            UtilizationCategory::RoomForOptimization => Tone::Yellow,
            UtilizationCategory::MaximumEfficiency => Tone::Purple,
        }
    }
}

/// Output of [`calculate_multiplication_metrics`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplicationMetrics {
    pub potential_reach: f64,
    pub current_usage: f64,
    pub untapped_potential: f64,
    /// `current_usage / potential_reach * 100`, 0 when there is no reach
    pub utilization_rate: f64,
    pub category: UtilizationCategory,
}

/// Estimate how far existing content could be multiplied across platforms.
pub fn calculate_multiplication_metrics(answers: &AnswerRecord) -> MultiplicationMetrics {
    let platform_multiplier = answers.selection_count(PLATFORMS) as f64 * MULTIPLIER_PER_PLATFORM;
    let format_multiplier = ContentFormat::effectiveness_for(answers.choice(PRIMARY_FORMAT));
    let usage_rate = RepurposingRate::usage_for(answers.choice(REPURPOSING_RATE));

    let potential_reach = round_half_up(platform_multiplier * format_multiplier * 100.0);
    let current_usage = round_half_up(potential_reach * usage_rate);
    let untapped_potential = potential_reach - current_usage;

    // No platforms means no reach at all; report 0% instead of dividing by zero.
    let utilization_rate = if potential_reach > 0.0 {
        current_usage / potential_reach * 100.0
    } else {
        0.0
    };

    MultiplicationMetrics {
        potential_reach,
        current_usage,
        untapped_potential,
        utilization_rate,
        category: UtilizationCategory::from_rate(utilization_rate),
    }
}

impl From<MultiplicationMetrics> for SectionReport {
    fn from(m: MultiplicationMetrics) -> Self {
        let tone = m.category.tone();
        SectionReport::new(vec![
            Metric::number("Potential Reach", m.potential_reach, Unit::Percent, tone),
            Metric::number("Current Usage", m.current_usage, Unit::Percent, tone),
            Metric::text("Status", m.category.label(), tone),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_three_platforms_half_repurposed() {
        let answers = AnswerRecord::new()
            .with(PRIMARY_FORMAT, "Video")
            .with(PLATFORMS, vec!["LinkedIn", "YouTube", "TikTok"])
            .with(REPURPOSING_RATE, "26-50%");
        let m = calculate_multiplication_metrics(&answers);
        assert_eq!(m.potential_reach, 990.0);
        assert_eq!(m.current_usage, 495.0);
        assert_eq!(m.untapped_potential, 495.0);
        assert_eq!(m.category, UtilizationCategory::GoodPotential);
    }

    #[test]
    fn test_defaults_for_unknown_options() {
        // 2 * 1.5 * 1.4 * 100 = 420, usage 0.25 -> 105
        let answers = AnswerRecord::new()
            .with(PRIMARY_FORMAT, "Newsletter")
            .with(PLATFORMS, vec!["LinkedIn", "Instagram"])
            .with(REPURPOSING_RATE, "most of it");
        let m = calculate_multiplication_metrics(&answers);
        assert_eq!(m.potential_reach, 420.0);
        assert_eq!(m.current_usage, 105.0);
        assert_eq!(m.category, UtilizationCategory::MajorOpportunity);
    }

    #[test]
    fn test_zero_platforms_is_zero_safe() {
        let answers = AnswerRecord::new()
            .with(PRIMARY_FORMAT, "Blog")
            .with(REPURPOSING_RATE, "76-100%");
        let m = calculate_multiplication_metrics(&answers);
        assert_eq!(m.potential_reach, 0.0);
        assert_eq!(m.current_usage, 0.0);
        assert_eq!(m.untapped_potential, 0.0);
        assert_eq!(m.utilization_rate, 0.0);
        assert_eq!(m.category, UtilizationCategory::MajorOpportunity);
    }

    #[test]
    fn test_full_usage_is_maximum_efficiency() {
        let answers = AnswerRecord::new()
            .with(PRIMARY_FORMAT, "Podcast")
            .with(PLATFORMS, vec!["YouTube"])
            .with(REPURPOSING_RATE, "76-100%");
        let m = calculate_multiplication_metrics(&answers);
        assert_eq!(m.potential_reach, 240.0);
        assert_eq!(m.untapped_potential, 0.0);
        assert_eq!(m.category, UtilizationCategory::MaximumEfficiency);
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(UtilizationCategory::from_rate(25.0), UtilizationCategory::MajorOpportunity);
        assert_eq!(UtilizationCategory::from_rate(50.0), UtilizationCategory::GoodPotential);
        assert_eq!(UtilizationCategory::from_rate(75.0), UtilizationCategory::RoomForOptimization);
        assert_eq!(UtilizationCategory::from_rate(75.1), UtilizationCategory::MaximumEfficiency);
    }

    #[test]
    fn test_report_has_no_warnings() {
        let report: SectionReport = calculate_multiplication_metrics(&AnswerRecord::new()).into();
        assert_eq!(report.metrics.len(), 3);
        assert!(!report.has_warnings());
        assert_eq!(report.metric("Potential Reach").unwrap().display_value(), "0%");
    }

    #[test]
    fn test_idempotent() {
        let answers = AnswerRecord::new()
            .with(PRIMARY_FORMAT, "Podcast")
            .with(PLATFORMS, vec!["LinkedIn", "YouTube"])
            .with(REPURPOSING_RATE, "51-75%");
        assert_eq!(
            calculate_multiplication_metrics(&answers),
            calculate_multiplication_metrics(&answers)
        );
    }
}
