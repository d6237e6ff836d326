//! Error types for the Proxify front page.
//!
//! Nothing here is fatal to the running UI. Registry failures degrade to
//! "nothing new to show" and are routed to a [`DiagnosticSink`]; theme store
//! failures keep the in-memory preference. Only [`ConfigError`] can stop the
//! program, and only before the terminal is taken over.
//!
//! | Error | Category | Surfaced as |
//! |-------|----------|-------------|
//! | [`RegistryError::Transport`] | network | diagnostic, snapshot kept |
//! | [`RegistryError::Status`] | server / client | diagnostic, snapshot kept |
//! | [`RegistryError::Malformed`] | client | diagnostic, snapshot kept |
//! | [`ThemeStoreError`] | system | diagnostic, preference kept in memory |
//! | [`ConfigError`] | none | `main` exits with an error |
//!
//! [`DiagnosticSink`]: crate::traits::DiagnosticSink

mod category;
mod config;
mod registry;
mod theme_store;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use registry::RegistryError;
pub use theme_store::ThemeStoreError;
