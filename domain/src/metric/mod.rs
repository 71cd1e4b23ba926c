//! Derived metrics shown to the user
//!
//! A [`Metric`] is a labelled value produced fresh on every recalculation.
//! Its [`Tone`] is an opaque display category; nothing in the domain
//! interprets it beyond passing it to the presentation layer.

use crate::core::number::format_number;
use serde::{Deserialize, Serialize};

/// Display category attached to a metric or category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Emerald,
    Blue,
    Yellow,
    Red,
    Purple,
    #[default]
    Neutral,
}

/// Unit used when rendering a numeric metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// `42%`
    Percent,
    /// `130h`
    Hours,
    /// `$2,500`
    Dollars,
    /// `1,234`
    Plain,
}

/// The value carried by a metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MetricValue {
    Number { value: f64, unit: Unit },
    Text { value: String },
}

/// A single labelled derived value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    pub tone: Tone,
}

impl Metric {
    pub fn number(label: impl Into<String>, value: f64, unit: Unit, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value: MetricValue::Number { value, unit },
            tone,
        }
    }

    pub fn text(label: impl Into<String>, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value: MetricValue::Text {
                value: value.into(),
            },
            tone,
        }
    }

    /// Numeric value, if this is a numeric metric
    pub fn as_number(&self) -> Option<f64> {
        match &self.value {
            MetricValue::Number { value, .. } => Some(*value),
            MetricValue::Text { .. } => None,
        }
    }

    /// Rendered value (`$2,500`, `71h`, `Sustainable`)
    pub fn display_value(&self) -> String {
        match &self.value {
            MetricValue::Number { value, unit } => {
                let n = format_number(*value);
                match unit {
                    Unit::Percent => format!("{}%", n),
                    Unit::Hours => format!("{}h", n),
                    Unit::Dollars => format!("${}", n),
                    Unit::Plain => n,
                }
            }
            MetricValue::Text { value } => value.clone(),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.display_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_units() {
        let dollars = Metric::number("Current Revenue", 2500.0, Unit::Dollars, Tone::Green);
        assert_eq!(dollars.display_value(), "$2,500");

        let hours = Metric::number("Saved", 71.0, Unit::Hours, Tone::Blue);
        assert_eq!(hours.display_value(), "71h");

        let percent = Metric::number("Stress Level", 47.0, Unit::Percent, Tone::Yellow);
        assert_eq!(percent.to_string(), "Stress Level: 47%");
    }

    #[test]
    fn test_text_metric() {
        let status = Metric::text("Status", "Sustainable", Tone::Green);
        assert_eq!(status.display_value(), "Sustainable");
        assert_eq!(status.as_number(), None);
    }

    #[test]
    fn test_serialize_tagged_value() {
        let metric = Metric::number("Potential Reach", 990.0, Unit::Percent, Tone::Green);
        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["value"]["kind"], "number");
        assert_eq!(json["value"]["unit"], "percent");
        assert_eq!(json["tone"], "green");
    }
}
