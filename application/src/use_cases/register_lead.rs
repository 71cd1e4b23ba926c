//! Register lead use case
//!
//! Validates the visitor's name and email and hands the lead to the
//! configured [`LeadSubmitter`]. Field errors block submission; a delivery
//! failure collapses to one generic, retryable message.

use crate::ports::event_logger::{AssessmentEvent, AssessmentEventLogger, NoEventLogger};
use crate::ports::lead_submitter::{LeadSubmitter, SubmissionError};
use serde_json::json;
use socialflip_domain::{Lead, LeadValidationError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum RegisterLeadError {
    #[error("{}", join_messages(.0))]
    Invalid(Vec<LeadValidationError>),

    #[error("Failed to submit form. Please try again.")]
    SubmissionFailed(#[source] SubmissionError),
}

impl RegisterLeadError {
    /// Field errors, empty for submission failures
    pub fn field_errors(&self) -> &[LeadValidationError] {
        match self {
            RegisterLeadError::Invalid(errors) => errors,
            RegisterLeadError::SubmissionFailed(_) => &[],
        }
    }
}

fn join_messages(errors: &[LeadValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub struct RegisterLeadUseCase {
    submitter: Arc<dyn LeadSubmitter>,
    event_logger: Arc<dyn AssessmentEventLogger>,
}

impl RegisterLeadUseCase {
    pub fn new(submitter: Arc<dyn LeadSubmitter>) -> Self {
        Self {
            submitter,
            event_logger: Arc::new(NoEventLogger),
        }
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn AssessmentEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub async fn execute(&self, lead: &Lead) -> Result<(), RegisterLeadError> {
        let errors = lead.validate();
        if !errors.is_empty() {
            return Err(RegisterLeadError::Invalid(errors));
        }

        if let Err(e) = self.submitter.submit(lead).await {
            warn!("Lead submission failed: {}", e);
            return Err(RegisterLeadError::SubmissionFailed(e));
        }

        info!("Lead registered");
        self.event_logger.log(AssessmentEvent::new(
            "lead_registered",
            json!({ "name": lead.name, "email": lead.email }),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSubmitter {
        submitted: Mutex<Vec<Lead>>,
        fail_with: Option<u16>,
    }

    impl RecordingSubmitter {
        fn ok() -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                fail_with: Some(status),
            }
        }
    }

    #[async_trait]
    impl LeadSubmitter for RecordingSubmitter {
        async fn submit(&self, lead: &Lead) -> Result<(), SubmissionError> {
            self.submitted.lock().unwrap().push(lead.clone());
            match self.fail_with {
                Some(status) => Err(SubmissionError::Status(status)),
                None => Ok(()),
            }
        }
    }

    struct CountingLogger(Mutex<Vec<&'static str>>);

    impl AssessmentEventLogger for CountingLogger {
        fn log(&self, event: AssessmentEvent) {
            self.0.lock().unwrap().push(event.event_type);
        }
    }

    #[tokio::test]
    async fn test_valid_lead_is_submitted_once() {
        let submitter = Arc::new(RecordingSubmitter::ok());
        let logger = Arc::new(CountingLogger(Mutex::new(Vec::new())));
        let use_case =
            RegisterLeadUseCase::new(submitter.clone()).with_event_logger(logger.clone());

        use_case
            .execute(&Lead::new("Ada", "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(submitter.submitted.lock().unwrap().len(), 1);
        assert_eq!(*logger.0.lock().unwrap(), vec!["lead_registered"]);
    }

    #[tokio::test]
    async fn test_invalid_lead_is_not_submitted() {
        let submitter = Arc::new(RecordingSubmitter::ok());
        let use_case = RegisterLeadUseCase::new(submitter.clone());

        let err = use_case.execute(&Lead::new("", "nope")).await.unwrap_err();

        assert_eq!(
            err.field_errors(),
            &[
                LeadValidationError::NameRequired,
                LeadValidationError::InvalidEmail
            ]
        );
        assert_eq!(
            err.to_string(),
            "Name is required; Please enter a valid email address"
        );
        assert!(submitter.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submission_failure_is_generic() {
        let use_case = RegisterLeadUseCase::new(Arc::new(RecordingSubmitter::failing(500)));

        let err = use_case
            .execute(&Lead::new("Ada", "ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, RegisterLeadError::SubmissionFailed(_)));
        assert_eq!(err.to_string(), "Failed to submit form. Please try again.");
        assert!(err.field_errors().is_empty());
    }
}
