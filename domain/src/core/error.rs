//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown question '{question}' in section {section}")]
    UnknownQuestion { section: String, question: String },

    #[error("Invalid answer for '{question}': {reason}")]
    InvalidAnswer { question: String, reason: String },

    #[error("Assessment incomplete, missing sections: {}", .0.join(", "))]
    IncompleteAssessment(Vec<String>),
}

impl DomainError {
    /// Build an [`DomainError::InvalidAnswer`] for a question id
    pub fn invalid_answer(question: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::InvalidAnswer {
            question: question.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error means the user typed something unusable
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidAnswer { .. } | DomainError::UnknownQuestion { .. }
        )
    }
}
