//! Answer value object

use serde::{Deserialize, Serialize};

/// A single raw answer
///
/// Answers arrive as typed text (number fields and single selects), as a
/// scale or number value, or as a list of options from a multi-select.
/// Deserialization is untagged so answer files can write `4`, `"4"`,
/// `"Often"` or `["Blog", "TikTok"]` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A numeric answer (scale buttons, parsed number fields)
    Number(f64),
    /// Free text: a numeric string or the single selected option
    Text(String),
    /// Options picked in a multi-select
    Choices(Vec<String>),
}

impl AnswerValue {
    /// Build a text answer
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    /// Build a multi-select answer
    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Choices(values.into_iter().map(Into::into).collect())
    }

    /// Numeric interpretation of the answer.
    ///
    /// Empty, non-numeric and non-finite values coerce to `0.0`; a bad number
    /// is never an error.
    pub fn as_number(&self) -> f64 {
        match self {
            AnswerValue::Number(n) if n.is_finite() => *n,
            AnswerValue::Number(_) => 0.0,
            AnswerValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0),
            AnswerValue::Choices(_) => 0.0,
        }
    }

    /// The single selected option (trimmed), if this is a non-blank text answer
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) if !s.trim().is_empty() => Some(s.trim()),
            _ => None,
        }
    }

    /// Number of selected options.
    ///
    /// A lone text or number value counts as one selection.
    pub fn selection_count(&self) -> usize {
        match self {
            AnswerValue::Choices(items) => items.len(),
            AnswerValue::Text(s) if s.trim().is_empty() => 0,
            AnswerValue::Text(_) | AnswerValue::Number(_) => 1,
        }
    }

    /// Whether the user actually provided something
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Number(_) => false,
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::Choices(items) => items.is_empty(),
        }
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => write!(f, "{}", s),
            AnswerValue::Choices(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::Choices(value)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(value: Vec<&str>) -> Self {
        AnswerValue::choices(value)
    }
}
