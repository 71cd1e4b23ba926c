//! Answer records
//!
//! Every assessment section owns one [`AnswerRecord`]: a flat mapping from
//! question id to the raw [`AnswerValue`] the user gave. Records are transient
//! input; calculators only ever read them.

pub mod record;
pub mod value;

pub use record::AnswerRecord;
pub use value::AnswerValue;
