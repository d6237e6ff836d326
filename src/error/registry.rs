//! Errors raised while fetching the route registry.

use thiserror::Error;

use super::ErrorCategory;
use crate::traits::HttpError;

/// Why a registry load produced nothing new to show.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    /// The backend answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not `{ "data": [...] }`.
    #[error("malformed registry body from {url}: {message}")]
    Malformed { url: String, message: String },
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::Transport { .. } => ErrorCategory::Network,
            RegistryError::Status { status, .. } if *status >= 500 => ErrorCategory::Server,
            RegistryError::Status { .. } => ErrorCategory::Client,
            RegistryError::Malformed { .. } => ErrorCategory::Client,
        }
    }
}
