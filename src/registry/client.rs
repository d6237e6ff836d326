//! Fetches `GET /api/routes` and normalizes the body.

use serde::Deserialize;
use std::sync::Arc;

use super::model::{ApiEndpoint, WireEndpoint};
use crate::error::RegistryError;
use crate::traits::{Headers, HttpClient};

/// Path of the registry endpoint, relative to the site base URL.
pub const ROUTES_PATH: &str = "/api/routes";

/// Top-level body. Entries are decoded one at a time so that a single bad
/// entry does not sink the whole list.
#[derive(Debug, Deserialize)]
struct RouteListBody {
    data: Vec<serde_json::Value>,
}

/// An entry of `data` that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position in the backend's `data` array.
    pub index: usize,
    pub reason: String,
}

/// Result of a successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// Endpoints in backend order.
    pub endpoints: Vec<ApiEndpoint>,
    pub skipped: Vec<SkippedEntry>,
}

/// Decode a registry body.
///
/// Fails only when the body is not JSON or has no `data` array. Entries that
/// do not match [`WireEndpoint`] are left out and listed in
/// [`Registry::skipped`]; the rest keep their order.
pub fn normalize(body: &[u8]) -> Result<Registry, serde_json::Error> {
    let RouteListBody { data } = serde_json::from_slice(body)?;

    let mut registry = Registry::default();
    for (index, value) in data.into_iter().enumerate() {
        match serde_json::from_value::<WireEndpoint>(value) {
            Ok(wire) => registry.endpoints.push(wire.into()),
            Err(e) => registry.skipped.push(SkippedEntry {
                index,
                reason: e.to_string(),
            }),
        }
    }
    Ok(registry)
}

/// Client for the route registry of one Proxify site.
#[derive(Clone)]
pub struct RegistryClient {
    http: Arc<dyn HttpClient>,
    routes_url: String,
}

impl RegistryClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            http,
            routes_url: format!("{}{}", base_url.trim_end_matches('/'), ROUTES_PATH),
        }
    }

    pub fn routes_url(&self) -> &str {
        &self.routes_url
    }

    /// Issue exactly one request and normalize the answer.
    pub async fn fetch(&self) -> Result<Registry, RegistryError> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self
            .http
            .get(&self.routes_url, &headers)
            .await
            .map_err(|source| RegistryError::Transport {
                url: self.routes_url.clone(),
                source,
            })?;

        if !response.is_success() {
            return Err(RegistryError::Status {
                url: self.routes_url.clone(),
                status: response.status,
            });
        }

        normalize(&response.body).map_err(|e| RegistryError::Malformed {
            url: self.routes_url.clone(),
            message: e.to_string(),
        })
    }
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("routes_url", &self.routes_url)
            .finish_non_exhaustive()
    }
}
