//! Presentation layer for socialflip
//!
//! This crate contains CLI definitions, output formatters
//! and the interactive assessment session.

pub mod cli;
pub mod config;
pub mod interactive;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use interactive::AssessmentRepl;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
