//! Diagnostic sink that writes through `tracing`.

use crate::traits::{Diagnostic, DiagnosticSink, Severity};

/// Default sink for the running app: every diagnostic becomes a log event
/// in the file configured by [`crate::logging`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        let source = diagnostic.source.as_str();
        let category = diagnostic.category.as_str();
        match diagnostic.severity {
            Severity::Warning => {
                tracing::warn!(source, category, "{}", diagnostic.message)
            }
            Severity::Error => {
                tracing::error!(
                    source,
                    category,
                    hint = diagnostic.category.recovery_hint(),
                    "{}",
                    diagnostic.message
                )
            }
        }
    }
}
