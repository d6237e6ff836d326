//! Diagnostic sink abstraction.
//!
//! Failures that the UI deliberately swallows (registry loads, preference
//! writes) are still reported somewhere. The sink is that somewhere: the
//! running app logs through `tracing`, tests record into a vector.

use crate::error::ErrorCategory;

/// Which part of the front page produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSource {
    /// The whole `/api/routes` request failed.
    RegistryLoad,
    /// A single entry of the registry could not be decoded and was skipped.
    RegistryEntry,
    /// Reading or writing the persisted theme preference failed.
    ThemeStore,
}

impl DiagnosticSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticSource::RegistryLoad => "registry_load",
            DiagnosticSource::RegistryEntry => "registry_entry",
            DiagnosticSource::ThemeStore => "theme_store",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single swallowed failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub source: DiagnosticSource,
    pub severity: Severity,
    pub category: ErrorCategory,
    pub message: String,
}

impl Diagnostic {
    pub fn error(
        source: DiagnosticSource,
        category: ErrorCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            severity: Severity::Error,
            category,
            message: message.into(),
        }
    }

    pub fn warning(
        source: DiagnosticSource,
        category: ErrorCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            severity: Severity::Warning,
            category,
            message: message.into(),
        }
    }
}

/// Receives diagnostics for failures that never reach the user.
///
/// Implementations must not panic and must not block; `report` is called
/// from inside the registry load task and from the UI thread.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_constructors() {
        let err = Diagnostic::error(
            DiagnosticSource::RegistryLoad,
            ErrorCategory::Network,
            "refused",
        );
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.message, "refused");

        let warn = Diagnostic::warning(
            DiagnosticSource::RegistryEntry,
            ErrorCategory::Client,
            "missing field `target`",
        );
        assert_eq!(warn.severity, Severity::Warning);
        assert_eq!(warn.source.as_str(), "registry_entry");
    }
}
