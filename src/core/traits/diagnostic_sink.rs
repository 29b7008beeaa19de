//! Destinations for non-fatal soma diagnostics.
//!
//! Warn-and-continue findings are stored on the [`Soma`](crate::core::soma::Soma)
//! and also forwarded, verbatim, to a [`DiagnosticSink`] supplied by the caller.
//! Morphology readers usually pass their own logger; tests collect into a
//! `Vec`.

use crate::core::validation::SomaDiagnostic;

/// Receives diagnostics as they are raised.
pub trait DiagnosticSink {
    /// Called once per diagnostic, in the order they are raised.
    fn warn(&mut self, diagnostic: &SomaDiagnostic);
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&mut self, diagnostic: &SomaDiagnostic) {
        tracing::warn!("{diagnostic}");
    }
}

/// Collects diagnostics for later inspection.
impl DiagnosticSink for Vec<SomaDiagnostic> {
    fn warn(&mut self, diagnostic: &SomaDiagnostic) {
        self.push(diagnostic.clone());
    }
}

/// Discards diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&mut self, _diagnostic: &SomaDiagnostic) {}
}
