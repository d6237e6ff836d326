//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{routes_json, TestAppBuilder};
//!
//! let http = MockHttpClient::new();
//! let app = TestAppBuilder::new(&http).build();
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use proxify_tui::adapters::mock::{InMemoryThemeStore, MockHttpClient, RecordingSink};
use proxify_tui::app::App;
use proxify_tui::i18n::{Catalog, Locale};
use proxify_tui::registry::RegistryClient;
use proxify_tui::theme::{ThemeController, ThemePreference};
use ratatui::buffer::Buffer;
use serde_json::{json, Value};
use unicode_width::UnicodeWidthStr;

pub const TEST_BASE_URL: &str = "http://proxify.test";

/// `{ "data": [...] }` with `n` entries; entry 0 is the self-host route.
pub fn routes_json(n: usize) -> Value {
    let data: Vec<Value> = (0..n)
        .map(|i| {
            if i == 0 {
                json!({
                    "name": "Self Host",
                    "path": "/self-host",
                    "target": "https://proxify.example.com",
                })
            } else {
                json!({
                    "name": format!("Route {:02}", i),
                    "path": format!("/route-{}", i),
                    "target": format!("https://upstream-{}.example.com/v1", i),
                    "description": "ignored by the front page",
                })
            }
        })
        .collect();
    json!({ "data": data })
}

/// Everything in `buf`, one line per row.
///
/// Cells hidden behind a double-width symbol are skipped so CJK text reads
/// back the way it was written.
pub fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in buf.area.y..buf.area.y + buf.area.height {
        let mut hidden = 0;
        for x in buf.area.x..buf.area.x + buf.area.width {
            if hidden > 0 {
                hidden -= 1;
                continue;
            }
            if let Some(cell) = buf.cell((x, y)) {
                let symbol = cell.symbol();
                out.push_str(symbol);
                hidden = UnicodeWidthStr::width(symbol).saturating_sub(1);
            }
        }
        out.push('\n');
    }
    out
}

/// Builder for App instances wired to in-memory doubles.
pub struct TestAppBuilder {
    http: MockHttpClient,
    locale: Locale,
    sink: Arc<RecordingSink>,
    store: Arc<InMemoryThemeStore>,
}

impl TestAppBuilder {
    pub fn new(http: &MockHttpClient) -> Self {
        Self {
            http: http.clone(),
            locale: Locale::En,
            sink: Arc::new(RecordingSink::new()),
            store: Arc::new(InMemoryThemeStore::new()),
        }
    }

    /// Start from a persisted preference. Call before [`Self::store`].
    pub fn with_theme(mut self, theme: ThemePreference) -> Self {
        self.store = Arc::new(InMemoryThemeStore::with_theme(theme));
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn sink(&self) -> Arc<RecordingSink> {
        Arc::clone(&self.sink)
    }

    pub fn store(&self) -> Arc<InMemoryThemeStore> {
        Arc::clone(&self.store)
    }

    pub fn build(self) -> App {
        let theme = ThemeController::init(Some(self.store.clone()), self.sink.clone());
        let registry = RegistryClient::new(Arc::new(self.http), TEST_BASE_URL);
        App::new(
            theme,
            registry,
            self.sink,
            Arc::new(Catalog::new(self.locale)),
        )
    }
}
