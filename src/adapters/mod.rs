//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TracingSink`] - diagnostic sink that logs through `tracing`
//! - [`FileThemeStore`] - theme preference in `~/.proxify/preferences.json`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable, holdable HTTP responses
//! - [`mock::RecordingSink`] - diagnostics kept in memory
//! - [`mock::InMemoryThemeStore`] - theme persistence in memory

pub mod file_theme_store;
pub mod mock;
pub mod reqwest_http;
pub mod tracing_sink;

pub use file_theme_store::FileThemeStore;
pub use mock::{InMemoryThemeStore, MockHttpClient, RecordingSink};
pub use reqwest_http::ReqwestHttpClient;
pub use tracing_sink::TracingSink;
