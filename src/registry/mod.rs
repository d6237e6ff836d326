//! The supported-API registry: wire decoding, normalization and loading.
//!
//! ```text
//! GET /api/routes ──► RegistryClient::fetch ──► normalize ──► load ──► panel snapshot
//! ```

mod client;
mod loader;
mod model;

pub use client::{normalize, Registry, RegistryClient, SkippedEntry, ROUTES_PATH};
pub use loader::{load, LoadOutcome};
pub use model::{ApiEndpoint, BadgeKind, WireEndpoint, SELF_HOST_PATH};
