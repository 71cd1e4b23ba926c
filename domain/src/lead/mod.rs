//! Lead capture
//!
//! A [`Lead`] is the visitor who registers before taking the assessment.
//! Validation failures are recovered locally: they block submission and are
//! shown next to the offending field.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex")
});

/// Which form field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadField {
    Name,
    Email,
}

/// A single field validation failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl LeadValidationError {
    pub fn field(&self) -> LeadField {
        match self {
            LeadValidationError::NameRequired => LeadField::Name,
            LeadValidationError::EmailRequired | LeadValidationError::InvalidEmail => {
                LeadField::Email
            }
        }
    }
}

/// Registration payload, posted as `{"name": ..., "email": ...}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
}

impl Lead {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check both fields, returning every problem found (name first)
    pub fn validate(&self) -> Vec<LeadValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(LeadValidationError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.push(LeadValidationError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.push(LeadValidationError::InvalidEmail);
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
