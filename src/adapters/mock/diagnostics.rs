//! Recording diagnostic sink for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{Diagnostic, DiagnosticSink};

/// Keeps every reported diagnostic in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    reported: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.reported.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.lock().unwrap().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.reported.lock().unwrap().push(diagnostic);
    }
}
