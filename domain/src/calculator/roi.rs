//! Repurposing ROI projector

use super::SectionReport;
use crate::answer::AnswerRecord;
use crate::core::number::round_half_up;
use crate::metric::{Metric, Tone, Unit};
use serde::{Deserialize, Serialize};

pub const REVENUE_PER_PIECE: &str = "revenuePerPiece";
pub const MONTHLY_LEADS: &str = "monthlyLeads";
pub const CONVERSION_RATE: &str = "conversionRate";

/// ROI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoiCategory {
    Exceptional,
    Strong,
    Good,
    Moderate,
    ReviewStrategy,
}

impl RoiCategory {
    pub fn from_percentage(roi: f64) -> Self {
        if roi > 200.0 {
            RoiCategory::Exceptional
        } else if roi >= 150.0 {
            RoiCategory::Strong
        } else if roi >= 100.0 {
            RoiCategory::Good
        } else if roi >= 50.0 {
            RoiCategory::Moderate
        } else {
            RoiCategory::ReviewStrategy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoiCategory::Exceptional => "Exceptional ROI",
            RoiCategory::Strong => "Strong ROI",
            RoiCategory::Good => "Good ROI",
            RoiCategory::Moderate => "Moderate ROI",
            RoiCategory::ReviewStrategy => "Review Strategy",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RoiCategory::Exceptional => Tone::Green,
            RoiCategory::Strong => Tone::Emerald,
            RoiCategory::Good => Tone::Blue,
            RoiCategory::Moderate => Tone::Yellow,
            RoiCategory::ReviewStrategy => Tone::Red,
        }
    }
}

/// Output of [`calculate_roi_metrics`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    /// Rounded current monthly revenue
    pub monthly_revenue: f64,
    /// Rounded projected monthly revenue
    pub potential_revenue: f64,
    pub roi_percentage: f64,
    pub revenue_multiplier: f64,
    pub conversion_multiplier: f64,
    pub category: RoiCategory,
}

/// Revenue uplift multiplier; smaller tickets have more headroom.
pub fn revenue_multiplier(revenue_per_piece: f64) -> f64 {
    if revenue_per_piece < 1000.0 {
        3.2
    } else if revenue_per_piece < 5000.0 {
        2.6
    } else if revenue_per_piece < 10000.0 {
        2.2
    } else {
        1.8
    }
}

/// Conversion uplift multiplier; low converters have more headroom.
pub fn conversion_multiplier(conversion_rate: f64) -> f64 {
    if conversion_rate < 2.0 {
        2.8
    } else if conversion_rate < 5.0 {
        2.4
    } else if conversion_rate < 10.0 {
        2.0
    } else {
        1.6
    }
}

/// Project current and potential revenue from content-driven leads.
pub fn calculate_roi_metrics(answers: &AnswerRecord) -> RoiMetrics {
    let average_revenue = answers.number(REVENUE_PER_PIECE);
    let monthly_leads = answers.number(MONTHLY_LEADS);
    let conversion_rate = answers.number(CONVERSION_RATE);

    let current_conversion = conversion_rate / 100.0;
    let current_sales = monthly_leads * current_conversion;
    let current_revenue = average_revenue * current_sales;

    let revenue_multiplier = revenue_multiplier(average_revenue);
    let conversion_multiplier = conversion_multiplier(conversion_rate);

    let potential_sales = monthly_leads * (current_conversion * conversion_multiplier);
    let potential_revenue = potential_sales * (average_revenue * revenue_multiplier);

    let roi_percentage = if current_revenue > 0.0 {
        round_half_up((potential_revenue - current_revenue) / current_revenue * 100.0)
    } else {
        0.0
    };

    RoiMetrics {
        monthly_revenue: round_half_up(current_revenue),
        potential_revenue: round_half_up(potential_revenue),
        roi_percentage,
        revenue_multiplier,
        conversion_multiplier,
        category: RoiCategory::from_percentage(roi_percentage),
    }
}

impl From<RoiMetrics> for SectionReport {
    fn from(m: RoiMetrics) -> Self {
        let tone = m.category.tone();
        SectionReport::new(vec![
            Metric::number("Current Revenue", m.monthly_revenue, Unit::Dollars, tone),
            Metric::number("Potential Revenue", m.potential_revenue, Unit::Dollars, tone),
            Metric::number("ROI Potential", m.roi_percentage, Unit::Percent, tone),
        ])
    }
}
