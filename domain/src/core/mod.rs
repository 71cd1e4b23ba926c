//! Core domain concepts shared across all subdomains.
//!
//! - [`number`]: numeric rounding and display helpers used by every calculator
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod number;
