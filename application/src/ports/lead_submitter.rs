//! Lead submitter port
//!
//! Defines the interface for handing a registered lead to the CRM webhook.

use async_trait::async_trait;
use socialflip_domain::Lead;
use thiserror::Error;

/// Errors that can occur while submitting a lead
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Webhook responded with status {0}")]
    Status(u16),

    #[error("Other error: {0}")]
    Other(String),
}

/// Destination for registered leads
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Deliver the lead once. No retry.
    async fn submit(&self, lead: &Lead) -> Result<(), SubmissionError>;
}
