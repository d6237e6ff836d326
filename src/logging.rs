//! File logging.
//!
//! The terminal belongs to the UI, so log events go to
//! `~/.proxify/logs/proxify.log`. The filter comes from `PROXIFY_LOG`
//! (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::adapters::file_theme_store::PREFERENCES_DIR;

pub const LOG_FILTER_ENV: &str = "PROXIFY_LOG";

const LOG_FILE: &str = "proxify.log";

/// Default log file location, if a home directory exists.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(PREFERENCES_DIR).join("logs").join(LOG_FILE))
}

/// Install the global subscriber writing to `path`.
///
/// Returns `false` (and installs nothing) when the file cannot be opened or
/// a subscriber is already set; the app runs without logs in that case.
pub fn init_file_logging(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
