//! Trait abstractions for the external collaborators of the front page.
//!
//! # Traits
//!
//! - [`HttpClient`] - fetch capability used to reach `/api/routes`
//! - [`DiagnosticSink`] - where swallowed failures are reported
//! - [`ThemeStore`] - persistence of the theme preference
//! - [`Translator`] - string lookup keyed by id

pub mod diagnostics;
pub mod http;
pub mod theme_store;
pub mod translate;

pub use diagnostics::{Diagnostic, DiagnosticSink, DiagnosticSource, Severity};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use theme_store::ThemeStore;
pub use translate::Translator;
