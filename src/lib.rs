pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{NullSink, TracingSink};
pub use config::rules::{decode_rules, DiscountRule};
pub use core::engine::{evaluate, DiscountEngine};
pub use domain::model::{EvaluationResult, RunInput};
pub use domain::ports::{DiagnosticEvent, DiagnosticSink};
pub use utils::error::{EngineError, Result};
