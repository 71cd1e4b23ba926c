//! Interactive assessment session

mod repl;

pub use repl::{AssessmentRepl, ReplCommand};
