//! In-memory theme store for testing.

use std::sync::{Arc, Mutex};

use crate::error::ThemeStoreError;
use crate::theme::ThemePreference;
use crate::traits::ThemeStore;

/// Theme store that keeps the value (and every save) in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThemeStore {
    current: Arc<Mutex<Option<ThemePreference>>>,
    saved: Arc<Mutex<Vec<ThemePreference>>>,
    load_should_fail: Arc<Mutex<bool>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: ThemePreference) -> Self {
        let store = Self::default();
        *store.current.lock().unwrap() = Some(theme);
        store
    }

    /// Every value passed to `save`, in order.
    pub fn saved(&self) -> Vec<ThemePreference> {
        self.saved.lock().unwrap().clone()
    }

    pub fn fail_loads(&self, fail: bool) {
        *self.load_should_fail.lock().unwrap() = fail;
    }

    pub fn fail_saves(&self, fail: bool) {
        *self.save_should_fail.lock().unwrap() = fail;
    }

    fn simulated_failure() -> ThemeStoreError {
        ThemeStoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "simulated failure",
        ))
    }
}

impl ThemeStore for InMemoryThemeStore {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeStoreError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(Self::simulated_failure());
        }
        Ok(*self.current.lock().unwrap())
    }

    fn save(&self, theme: ThemePreference) -> Result<(), ThemeStoreError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(Self::simulated_failure());
        }
        *self.current.lock().unwrap() = Some(theme);
        self.saved.lock().unwrap().push(theme);
        Ok(())
    }
}
