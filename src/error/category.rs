//! Error category classification.
//!
//! Categories group failures by what the user could do about them. Nothing
//! in the front page retries automatically; the category only shapes the
//! diagnostic that gets logged.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection refused, DNS failure, timeout.
    Network,

    /// The backend answered with a 5xx status.
    Server,

    /// The backend answered, but not with something we understand
    /// (4xx status, malformed JSON, wrong shape).
    Client,

    /// Filesystem errors while reading or writing local preferences.
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the Proxify server is reachable",
            ErrorCategory::Server => "The server may be restarting; reload with 'r'",
            ErrorCategory::Client => "The server returned an unexpected payload",
            ErrorCategory::System => "Check file permissions under ~/.proxify",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_matches_as_str() {
        for cat in [
            ErrorCategory::Network,
            ErrorCategory::Server,
            ErrorCategory::Client,
            ErrorCategory::System,
        ] {
            assert_eq!(cat.to_string(), cat.as_str());
            assert!(!cat.recovery_hint().is_empty());
        }
    }
}
