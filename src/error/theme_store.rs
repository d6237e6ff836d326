//! Errors raised by theme preference persistence.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("could not determine home directory")]
    NoHomeDirectory,

    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
