//! Theme preference persistence abstraction.

use crate::error::ThemeStoreError;
use crate::theme::ThemePreference;

/// Where the theme preference lives between sessions.
///
/// `load` returns `Ok(None)` when nothing has been stored yet; the caller
/// then falls back to [`ThemePreference::System`]. Stored values that are
/// not a known theme are read back as `System` too.
pub trait ThemeStore: Send + Sync {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeStoreError>;

    fn save(&self, theme: ThemePreference) -> Result<(), ThemeStoreError>;
}
