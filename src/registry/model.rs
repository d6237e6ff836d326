//! Wire and domain shapes of a registry entry.

use serde::{Deserialize, Serialize};

/// Path of the one endpoint that carries the verified badge.
pub const SELF_HOST_PATH: &str = "/self-host";

/// One entry of the `data` array returned by `GET /api/routes`.
///
/// The backend also sends `description` and `model_map`; they are not part
/// of the front page and are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEndpoint {
    pub name: String,
    pub path: String,
    pub target: String,
}

/// Marker drawn on distinguished endpoint cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    /// The self-hosted endpoint.
    Verified,
}

impl BadgeKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            BadgeKind::Verified => "✔",
        }
    }
}

/// An endpoint as the panel displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub name: String,
    pub path: String,
    /// Upstream URL the proxy forwards to; copied from `target`.
    pub official_url: String,
    pub badge: Option<BadgeKind>,
}

impl From<WireEndpoint> for ApiEndpoint {
    fn from(wire: WireEndpoint) -> Self {
        let badge = (wire.path == SELF_HOST_PATH).then_some(BadgeKind::Verified);
        Self {
            name: wire.name,
            path: wire.path,
            official_url: wire.target,
            badge,
        }
    }
}
