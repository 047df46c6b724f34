use crate::utils::error::EngineError;

/// Diagnostic events emitted while evaluating one cart. These are a side
/// channel only: recording an event must never change the engine's result.
#[derive(Debug)]
pub enum DiagnosticEvent<'a> {
    /// The stored rule configuration could not be decoded; the engine
    /// proceeds with an empty rule set.
    ConfigMalformed { error: &'a EngineError },
    /// A cart line is not a single product variant and was skipped.
    LineUnsupported { index: usize },
    /// Evaluation finished; `matched` instructions were produced.
    Evaluated { matched: usize },
}

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: DiagnosticEvent<'_>);
}
