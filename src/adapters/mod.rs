// Adapters layer: concrete implementations of the domain ports.

use crate::domain::ports::{DiagnosticEvent, DiagnosticSink};

/// Default sink: forwards diagnostics to `tracing`. Malformed configuration
/// is the only event worth a warning; the rest are routine per-cart noise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: DiagnosticEvent<'_>) {
        match event {
            DiagnosticEvent::ConfigMalformed { error } => {
                tracing::warn!("Discount configuration rejected: {}", error);
            }
            DiagnosticEvent::LineUnsupported { index } => {
                tracing::debug!("Cart line {} is not a product variant, skipped", index);
            }
            DiagnosticEvent::Evaluated { matched } => {
                tracing::debug!("Applied {} discounts", matched);
            }
        }
    }
}

/// Sink that drops every event, for hosts that want the engine silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _event: DiagnosticEvent<'_>) {}
}
