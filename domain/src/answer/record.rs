//! Answer record for one section

use super::value::AnswerValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Question id → answer mapping for a single section
///
/// Lookups never fail: a missing question reads as zero / no choice / no
/// selection, which is exactly how the calculators treat unanswered fields.
///
/// # Example
///
/// ```
/// use socialflip_domain::answer::AnswerRecord;
///
/// let record = AnswerRecord::new()
///     .with("teamSize", "3")
///     .with("platforms", vec!["Blog", "LinkedIn"]);
///
/// assert_eq!(record.number("teamSize"), 3.0);
/// assert_eq!(record.number("hourlyRate"), 0.0);
/// assert_eq!(record.selection_count("platforms"), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.set(question_id, value);
        self
    }

    /// Store (or replace) the answer to a question
    pub fn set(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(question_id.into(), value.into());
    }

    /// Remove an answer, returning the previous value
    pub fn clear(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.answers.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Numeric value of an answer, `0.0` when absent or not a number
    pub fn number(&self, question_id: &str) -> f64 {
        self.get(question_id).map_or(0.0, AnswerValue::as_number)
    }

    /// Selected option of a single-select answer
    pub fn choice(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(AnswerValue::as_choice)
    }

    /// Number of options selected in a multi-select answer
    pub fn selection_count(&self, question_id: &str) -> usize {
        self.get(question_id).map_or(0, AnswerValue::selection_count)
    }

    /// Whether a question has a non-blank answer
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|v| !v.is_blank())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = AnswerRecord::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}
