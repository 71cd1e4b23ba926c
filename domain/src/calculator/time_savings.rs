//! Time savings estimator

use super::SectionReport;
use crate::answer::AnswerRecord;
use crate::core::number::round_half_up;
use crate::metric::{Metric, Tone, Unit};
use serde::{Deserialize, Serialize};

pub const ADAPTATION_TIME: &str = "adaptationTime";
pub const TEAM_SIZE: &str = "teamSize";
pub const HOURLY_RATE: &str = "hourlyRate";

/// Average weeks per month
pub const WEEKS_PER_MONTH: f64 = 4.33;

pub const WARN_MONTHLY_HOURS: &str =
    "High monthly hours indicate potential workflow inefficiency";
pub const WARN_LARGE_TEAM: &str =
    "Large team size with high adaptation time suggests optimization opportunity";
pub const WARN_MONTHLY_COST: &str =
    "High monthly costs indicate need for automation and optimization";

/// Savings band for the hours saved per month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsCategory {
    Significant,
    GoodEfficiency,
    Moderate,
}

impl SavingsCategory {
    pub fn from_saved_hours(hours: f64) -> Self {
        if hours > 50.0 {
            SavingsCategory::Significant
        } else if hours > 20.0 {
            SavingsCategory::GoodEfficiency
        } else {
            SavingsCategory::Moderate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SavingsCategory::Significant => "Significant Savings",
            SavingsCategory::GoodEfficiency => "Good Efficiency",
            SavingsCategory::Moderate => "Moderate Savings",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            SavingsCategory::Significant => Tone::Green,
            SavingsCategory::GoodEfficiency => Tone::Blue,
            SavingsCategory::Moderate => Tone::Yellow,
        }
    }
}

/// Output of [`calculate_time_savings_metrics`]; all figures rounded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSavingsMetrics {
    pub current_hours: f64,
    pub current_cost: f64,
    pub saved_hours: f64,
    pub saved_costs: f64,
    pub savings_multiplier: f64,
    pub category: SavingsCategory,
    pub warnings: Vec<String>,
}

/// Share of adaptation time automation can recover for a team size.
pub fn savings_multiplier(team_size: f64) -> f64 {
    if team_size <= 2.0 {
        0.65
    } else if team_size <= 5.0 {
        0.55
    } else {
        0.45
    }
}

/// Estimate monthly adaptation effort and what automation would save.
pub fn calculate_time_savings_metrics(answers: &AnswerRecord) -> TimeSavingsMetrics {
    let hours_per_platform = answers.number(ADAPTATION_TIME);
    let team_size = answers.number(TEAM_SIZE);
    let hourly_rate = answers.number(HOURLY_RATE);

    let monthly_hours = hours_per_platform * WEEKS_PER_MONTH * team_size;
    let monthly_cost = monthly_hours * hourly_rate;

    let multiplier = savings_multiplier(team_size);
    let saved_hours = monthly_hours * multiplier;
    let saved_costs = saved_hours * hourly_rate;

    let mut warnings = Vec::new();
    if monthly_hours > 160.0 {
        warnings.push(WARN_MONTHLY_HOURS.to_string());
    }
    if team_size > 5.0 && hours_per_platform > 10.0 {
        warnings.push(WARN_LARGE_TEAM.to_string());
    }
    if monthly_cost > 10000.0 {
        warnings.push(WARN_MONTHLY_COST.to_string());
    }

    TimeSavingsMetrics {
        current_hours: round_half_up(monthly_hours),
        current_cost: round_half_up(monthly_cost),
        saved_hours: round_half_up(saved_hours),
        saved_costs: round_half_up(saved_costs),
        savings_multiplier: multiplier,
        // Banded on the unrounded figure
        category: SavingsCategory::from_saved_hours(saved_hours),
        warnings,
    }
}

impl From<TimeSavingsMetrics> for SectionReport {
    fn from(m: TimeSavingsMetrics) -> Self {
        let tone = m.category.tone();
        SectionReport::new(vec![
            Metric::number("Current Monthly Hours", m.current_hours, Unit::Hours, Tone::Neutral),
            Metric::number("Potential Hours Saved", m.saved_hours, Unit::Hours, tone),
            Metric::number("Cost Savings", m.saved_costs, Unit::Dollars, tone),
        ])
        .with_warnings(m.warnings)
    }
}
