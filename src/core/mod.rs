pub mod build;
pub mod classify;
pub mod engine;
pub mod matching;

pub use crate::domain::model::{CartLine, DiscountableLine, EvaluationResult, RunInput};
pub use crate::domain::ports::{DiagnosticEvent, DiagnosticSink};
pub use crate::utils::error::Result;
