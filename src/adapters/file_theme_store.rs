//! File-backed theme preference store.
//!
//! Persists the preference to `~/.proxify/preferences.json`:
//!
//! ```json
//! { "theme": "dark" }
//! ```

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ThemeStoreError;
use crate::theme::ThemePreference;
use crate::traits::ThemeStore;

/// The preferences directory name.
pub const PREFERENCES_DIR: &str = ".proxify";

/// The preferences file name.
const PREFERENCES_FILE: &str = "preferences.json";

/// On-disk shape. The theme is kept as a raw string so that a value written
/// by a newer version (or by hand) still loads, as `System`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    theme: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store under the user's home directory.
    pub fn new() -> Result<Self, ThemeStoreError> {
        let home = dirs::home_dir().ok_or(ThemeStoreError::NoHomeDirectory)?;
        Ok(Self::at(home.join(PREFERENCES_DIR).join(PREFERENCES_FILE)))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let prefs: PreferencesFile = serde_json::from_reader(reader)?;
        Ok(prefs.theme.as_deref().map(ThemePreference::parse_lenient))
    }

    fn save(&self, theme: ThemePreference) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let prefs = PreferencesFile {
            theme: Some(theme.as_str().to_string()),
        };
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &prefs)?;
        writer.flush()?;
        Ok(())
    }
}
