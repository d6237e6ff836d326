//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable (and holdable) responses
//! - [`RecordingSink`] - diagnostic sink that keeps what it was told
//! - [`InMemoryThemeStore`] - theme persistence without the file system

pub mod diagnostics;
pub mod http;
pub mod theme_store;

pub use diagnostics::RecordingSink;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use theme_store::InMemoryThemeStore;
