//! Workload stress calculator

use super::SectionReport;
use super::tables::OvertimeFrequency;
use crate::answer::AnswerRecord;
use crate::core::number::round_half_up;
use crate::metric::{Metric, Tone, Unit};
use serde::{Deserialize, Serialize};

pub const STRESS_LEVEL: &str = "stressLevel";
pub const PLATFORMS: &str = "platforms";
pub const OVERTIME: &str = "overtime";

/// Points per step on the 1–5 deadline stress scale
const DEADLINE_POINTS_PER_LEVEL: f64 = 20.0;
/// Load contributed by each platform with unique content
const LOAD_PER_PLATFORM: f64 = 14.3;
const MAX_STRESS_SCORE: f64 = 100.0;

pub const WARN_OVERTIME: &str = "High risk of burnout due to frequent overtime work";
pub const WARN_PLATFORM_OVERLOAD: &str = "Platform overload detected - consider consolidation";
pub const WARN_DEADLINE_STRESS: &str =
    "High deadline stress indicates need for workflow adjustment";

/// Stress band for the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressCategory {
    /// Score ≤ 40
    Sustainable,
    /// Score ≤ 70
    NeedsOptimization,
    RequiresIntervention,
}

impl StressCategory {
    pub fn from_score(score: f64) -> Self {
        if score <= 40.0 {
            StressCategory::Sustainable
        } else if score <= 70.0 {
            StressCategory::NeedsOptimization
        } else {
            StressCategory::RequiresIntervention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StressCategory::Sustainable => "Sustainable",
            StressCategory::NeedsOptimization => "Needs Optimization",
            StressCategory::RequiresIntervention => "Requires Intervention",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            StressCategory::Sustainable => Tone::Green,
            StressCategory::NeedsOptimization => Tone::Yellow,
            StressCategory::RequiresIntervention => Tone::Red,
        }
    }
}

/// Output of [`calculate_stress_metrics`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressMetrics {
    /// Combined score, capped at 100
    pub total_stress_score: f64,
    /// Rounded platform load
    pub platform_load: f64,
    /// Points from the overtime table
    pub overtime_impact: f64,
    pub category: StressCategory,
    pub warnings: Vec<String>,
}

/// Score the content-creation workload.
///
/// `total = min(round((stressLevel*20 + platforms*14.3 + overtime) / 3), 100)`
pub fn calculate_stress_metrics(answers: &AnswerRecord) -> StressMetrics {
    let stress_level = answers.number(STRESS_LEVEL);
    let platform_count = answers.selection_count(PLATFORMS);
    let overtime = answers.choice(OVERTIME).and_then(OvertimeFrequency::from_answer);

    let deadline_stress = stress_level * DEADLINE_POINTS_PER_LEVEL;
    let platform_load = platform_count as f64 * LOAD_PER_PLATFORM;
    let overtime_stress = overtime.map_or(0.0, OvertimeFrequency::stress_points);

    let total_stress_score =
        round_half_up((deadline_stress + platform_load + overtime_stress) / 3.0).min(MAX_STRESS_SCORE);

    let mut warnings = Vec::new();
    if overtime.is_some_and(OvertimeFrequency::is_burnout_risk) {
        warnings.push(WARN_OVERTIME.to_string());
    }
    if platform_count > 4 {
        warnings.push(WARN_PLATFORM_OVERLOAD.to_string());
    }
    if stress_level >= 4.0 {
        warnings.push(WARN_DEADLINE_STRESS.to_string());
    }

    StressMetrics {
        total_stress_score,
        platform_load: round_half_up(platform_load),
        overtime_impact: overtime_stress,
        category: StressCategory::from_score(total_stress_score),
        warnings,
    }
}

impl From<StressMetrics> for SectionReport {
    fn from(m: StressMetrics) -> Self {
        let tone = m.category.tone();
        SectionReport::new(vec![
            Metric::number("Stress Level", m.total_stress_score, Unit::Percent, tone),
            Metric::number("Platform Load", m.platform_load, Unit::Percent, tone),
            Metric::text("Status", m.category.label(), tone),
        ])
        .with_warnings(m.warnings)
    }
}
