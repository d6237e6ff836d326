//! One registry load per panel mount.

use crate::error::ErrorCategory;
use crate::lifecycle::MountToken;
use crate::traits::{Diagnostic, DiagnosticSink, DiagnosticSource};

use super::client::RegistryClient;
use super::model::ApiEndpoint;

/// What happened to a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot setter was called with `count` endpoints.
    Applied { count: usize, skipped: usize },
    /// The request failed and was reported; the setter was not called.
    Failed,
    /// The panel unmounted before the response arrived; nothing was applied
    /// or reported.
    Discarded,
}

/// Fetch the registry and hand it to `apply`.
///
/// Never returns an error. Failures go to `diagnostics` and leave whatever
/// snapshot the caller holds untouched. `apply` is called at most once, and
/// never after `token` has been cancelled by an unmount.
pub async fn load<F>(
    client: &RegistryClient,
    token: &MountToken,
    diagnostics: &dyn DiagnosticSink,
    apply: F,
) -> LoadOutcome
where
    F: FnOnce(Vec<ApiEndpoint>),
{
    let result = client.fetch().await;

    if !token.is_live() {
        tracing::debug!(mount = %token.id(), "panel unmounted before registry load resolved");
        return LoadOutcome::Discarded;
    }

    match result {
        Ok(registry) => {
            for entry in &registry.skipped {
                diagnostics.report(Diagnostic::warning(
                    DiagnosticSource::RegistryEntry,
                    ErrorCategory::Client,
                    format!("skipped registry entry {}: {}", entry.index, entry.reason),
                ));
            }

            let count = registry.endpoints.len();
            let skipped = registry.skipped.len();
            tracing::info!(count, skipped, url = client.routes_url(), "registry loaded");
            apply(registry.endpoints);
            LoadOutcome::Applied { count, skipped }
        }
        Err(e) => {
            diagnostics.report(Diagnostic::error(
                DiagnosticSource::RegistryLoad,
                e.category(),
                format!("Failed to fetch routes: {}", e),
            ));
            LoadOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, RecordingSink};
    use crate::lifecycle::{Mount, MountId};
    use crate::traits::{HttpError, Response, Severity};
    use std::sync::Arc;

    fn client_with(response: MockResponse) -> (RegistryClient, MockHttpClient) {
        let http = MockHttpClient::new();
        http.set_default_response(response);
        (RegistryClient::new(Arc::new(http.clone()), "http://t"), http)
    }

    #[tokio::test]
    async fn test_load_applies_snapshot() {
        let (client, _) = client_with(MockResponse::Success(Response::json_ok(
            &serde_json::json!({ "data": [
                { "name": "A", "path": "/a", "target": "https://a" },
                { "name": "B", "path": "/self-host", "target": "https://b" }
            ]}),
        )));
        let mount = Mount::new(MountId::new(1));
        let sink = RecordingSink::new();
        let mut snapshot = Vec::new();

        let outcome = load(&client, &mount.token(), &sink, |eps| snapshot = eps).await;

        assert_eq!(outcome, LoadOutcome::Applied { count: 2, skipped: 0 });
        assert_eq!(snapshot.len(), 2);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_snapshot_and_reports() {
        let (client, _) = client_with(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let mount = Mount::new(MountId::new(1));
        let sink = RecordingSink::new();
        let mut snapshot: Vec<ApiEndpoint> = Vec::new();
        let mut called = false;

        let outcome = load(&client, &mount.token(), &sink, |eps| {
            called = true;
            snapshot = eps;
        })
        .await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(!called);
        assert!(snapshot.is_empty());

        let reported = sink.diagnostics();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].source, DiagnosticSource::RegistryLoad);
        assert_eq!(reported[0].severity, Severity::Error);
        assert_eq!(reported[0].category, ErrorCategory::Network);
        assert!(reported[0].message.starts_with("Failed to fetch routes"));
    }

    #[tokio::test]
    async fn test_skipped_entries_are_reported_as_warnings() {
        let (client, _) = client_with(MockResponse::Success(Response::json_ok(
            &serde_json::json!({ "data": [
                { "name": "A", "path": "/a", "target": "https://a" },
                { "name": "broken" }
            ]}),
        )));
        let mount = Mount::new(MountId::new(1));
        let sink = RecordingSink::new();
        let mut snapshot = Vec::new();

        let outcome = load(&client, &mount.token(), &sink, |eps| snapshot = eps).await;

        assert_eq!(outcome, LoadOutcome::Applied { count: 1, skipped: 1 });
        let reported = sink.diagnostics();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].source, DiagnosticSource::RegistryEntry);
        assert_eq!(reported[0].severity, Severity::Warning);
    }

    #[tokio::test]
    async fn test_unmount_before_resolve_never_calls_setter() {
        let (client, http) = client_with(MockResponse::Success(Response::json_ok(
            &serde_json::json!({ "data": [
                { "name": "A", "path": "/a", "target": "https://a" }
            ]}),
        )));
        let gate = http.hold_requests();
        let mount = Mount::new(MountId::new(7));
        let token = mount.token();
        let sink = RecordingSink::new();

        let setter_calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let spy = setter_calls.clone();
        let task_sink = sink.clone();
        let handle = tokio::spawn(async move {
            load(&client, &token, &task_sink, move |_| {
                spy.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            })
            .await
        });

        tokio::task::yield_now().await;
        drop(mount);
        gate.notify_one();

        assert_eq!(handle.await.unwrap(), LoadOutcome::Discarded);
        assert_eq!(setter_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert!(sink.is_empty());
    }
}
