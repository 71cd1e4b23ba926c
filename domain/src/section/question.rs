//! Question definitions and raw input parsing

use crate::answer::AnswerValue;
use crate::core::error::DomainError;
use serde::Serialize;

/// Input control for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free numeric field
    Number,
    /// 1–5 buttons
    Scale,
    /// Pick exactly one option
    Select(&'static [&'static str]),
    /// Pick any number of options
    #[serde(rename = "multiselect")]
    MultiSelect(&'static [&'static str]),
}

/// A single assessment question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
}

/// Lowest and highest value on the scale control
pub const SCALE_RANGE: (u8, u8) = (1, 5);

impl Question {
    pub const fn new(id: &'static str, text: &'static str, kind: QuestionKind) -> Self {
        Self { id, text, kind }
    }

    /// Options offered by select and multi-select questions
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            QuestionKind::Select(options) | QuestionKind::MultiSelect(options) => options,
            QuestionKind::Number | QuestionKind::Scale => &[],
        }
    }

    /// Turn what the user typed into an answer.
    ///
    /// - number: blank clears the field, otherwise must parse as a number
    /// - scale: an integer within [`SCALE_RANGE`]
    /// - select: an option name (case-insensitive) or its 1-based index
    /// - multi-select: comma-separated option names or indices; duplicates
    ///   are dropped, blank means "none selected"
    pub fn parse_input(&self, raw: &str) -> Result<AnswerValue, DomainError> {
        let input = raw.trim();
        match self.kind {
            QuestionKind::Number => {
                if input.is_empty() {
                    return Ok(AnswerValue::text(""));
                }
                input
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(AnswerValue::Number)
                    .ok_or_else(|| DomainError::invalid_answer(self.id, "expected a number"))
            }
            QuestionKind::Scale => {
                let (min, max) = SCALE_RANGE;
                input
                    .parse::<u8>()
                    .ok()
                    .filter(|n| (min..=max).contains(n))
                    .map(|n| AnswerValue::Number(f64::from(n)))
                    .ok_or_else(|| {
                        DomainError::invalid_answer(
                            self.id,
                            format!("expected a whole number from {} to {}", min, max),
                        )
                    })
            }
            QuestionKind::Select(options) => resolve_option(options, input)
                .map(AnswerValue::text)
                .ok_or_else(|| self.unknown_option(input)),
            QuestionKind::MultiSelect(options) => {
                let mut picked: Vec<String> = Vec::new();
                for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    let option =
                        resolve_option(options, part).ok_or_else(|| self.unknown_option(part))?;
                    if !picked.iter().any(|p| p == option) {
                        picked.push(option.to_string());
                    }
                }
                Ok(AnswerValue::Choices(picked))
            }
        }
    }

    fn unknown_option(&self, input: &str) -> DomainError {
        DomainError::invalid_answer(
            self.id,
            format!(
                "'{}' is not one of: {}",
                input,
                self.options().join(", ")
            ),
        )
    }
}

fn resolve_option(options: &'static [&'static str], input: &str) -> Option<&'static str> {
    if let Ok(index) = input.parse::<usize>()
        && (1..=options.len()).contains(&index)
    {
        return Some(options[index - 1]);
    }
    options
        .iter()
        .copied()
        .find(|option| option.eq_ignore_ascii_case(input))
}
