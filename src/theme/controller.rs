//! Process-wide holder of the current theme preference.

use std::sync::Arc;
use tokio::sync::watch;

use super::ThemePreference;
use crate::error::ErrorCategory;
use crate::traits::{Diagnostic, DiagnosticSink, DiagnosticSource, ThemeStore};

/// Owns the current [`ThemePreference`] for the whole session.
///
/// Created once at startup with [`ThemeController::init`], which reads the
/// persisted value (or falls back to `System`). It is never torn down.
/// Every consumer that needs to re-render on a change holds a
/// [`watch::Receiver`] from [`ThemeController::subscribe`]; the only writer
/// is [`ThemeController::cycle`] (plus [`ThemeController::set`] for the
/// startup override).
pub struct ThemeController {
    tx: watch::Sender<ThemePreference>,
    store: Option<Arc<dyn ThemeStore>>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ThemeController {
    /// Read the persisted preference, defaulting to `System`.
    ///
    /// A store that fails to load is reported and treated as empty.
    pub fn init(store: Option<Arc<dyn ThemeStore>>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        let initial = match store.as_ref().map(|s| s.load()) {
            Some(Ok(Some(theme))) => theme,
            Some(Ok(None)) | None => ThemePreference::default(),
            Some(Err(e)) => {
                diagnostics.report(Diagnostic::warning(
                    DiagnosticSource::ThemeStore,
                    ErrorCategory::System,
                    format!("failed to load theme preference: {}", e),
                ));
                ThemePreference::default()
            }
        };
        tracing::debug!(theme = %initial, "theme preference initialized");

        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            store,
            diagnostics,
        }
    }

    pub fn current(&self) -> ThemePreference {
        *self.tx.borrow()
    }

    /// A handle that is notified every time the preference changes.
    pub fn subscribe(&self) -> watch::Receiver<ThemePreference> {
        self.tx.subscribe()
    }

    /// Advance to the next theme, persist it and notify subscribers.
    pub fn cycle(&self) -> ThemePreference {
        let next = self.current().next();
        self.set(next);
        next
    }

    /// Replace the preference outright.
    pub fn set(&self, theme: ThemePreference) {
        self.tx.send_replace(theme);
        tracing::debug!(theme = %theme, "theme preference changed");

        if let Some(store) = &self.store {
            if let Err(e) = store.save(theme) {
                self.diagnostics.report(Diagnostic::warning(
                    DiagnosticSource::ThemeStore,
                    ErrorCategory::System,
                    format!("failed to persist theme preference: {}", e),
                ));
            }
        }
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("current", &self.current())
            .field("persisted", &self.store.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryThemeStore, RecordingSink};

    fn controller_with(store: InMemoryThemeStore) -> (ThemeController, RecordingSink) {
        let sink = RecordingSink::new();
        let controller = ThemeController::init(Some(Arc::new(store)), Arc::new(sink.clone()));
        (controller, sink)
    }

    #[test]
    fn test_init_defaults_to_system() {
        let (controller, sink) = controller_with(InMemoryThemeStore::new());
        assert_eq!(controller.current(), ThemePreference::System);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_init_without_store() {
        let controller = ThemeController::init(None, Arc::new(RecordingSink::new()));
        assert_eq!(controller.current(), ThemePreference::System);
        assert_eq!(controller.cycle(), ThemePreference::Light);
    }

    #[test]
    fn test_init_reads_persisted_value() {
        let store = InMemoryThemeStore::with_theme(ThemePreference::Dark);
        let (controller, _) = controller_with(store);
        assert_eq!(controller.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_cycle_persists_every_step() {
        let store = InMemoryThemeStore::new();
        let (controller, _) = controller_with(store.clone());

        assert_eq!(controller.cycle(), ThemePreference::Light);
        assert_eq!(store.saved(), vec![ThemePreference::Light]);
        assert_eq!(controller.cycle(), ThemePreference::Dark);
        assert_eq!(controller.cycle(), ThemePreference::System);
        assert_eq!(
            store.saved(),
            vec![
                ThemePreference::Light,
                ThemePreference::Dark,
                ThemePreference::System
            ]
        );
    }

    #[test]
    fn test_subscribers_see_changes() {
        let (controller, _) = controller_with(InMemoryThemeStore::new());
        let mut first = controller.subscribe();
        let second = controller.subscribe();

        assert!(!first.has_changed().unwrap());
        controller.cycle();
        assert!(first.has_changed().unwrap());
        assert_eq!(*first.borrow_and_update(), ThemePreference::Light);
        assert_eq!(*second.borrow(), ThemePreference::Light);
    }

    #[test]
    fn test_save_failure_is_reported_but_state_advances() {
        let store = InMemoryThemeStore::new();
        store.fail_saves(true);
        let (controller, sink) = controller_with(store);

        assert_eq!(controller.cycle(), ThemePreference::Light);
        assert_eq!(controller.current(), ThemePreference::Light);

        let reported = sink.diagnostics();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].source, DiagnosticSource::ThemeStore);
    }

    #[test]
    fn test_load_failure_falls_back_to_system() {
        let store = InMemoryThemeStore::with_theme(ThemePreference::Dark);
        store.fail_loads(true);
        let (controller, sink) = controller_with(store);

        assert_eq!(controller.current(), ThemePreference::System);
        assert_eq!(sink.diagnostics().len(), 1);
    }
}
