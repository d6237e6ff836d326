//! Registry loading over real HTTP against a wiremock server.
//!
//! Covers the request shape, normalization of the answer, and the failure
//! paths that must leave the snapshot alone.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::routes_json;
use proxify_tui::adapters::mock::RecordingSink;
use proxify_tui::adapters::ReqwestHttpClient;
use proxify_tui::error::{ErrorCategory, RegistryError};
use proxify_tui::lifecycle::{Mount, MountId};
use proxify_tui::registry::{load, ApiEndpoint, BadgeKind, LoadOutcome, RegistryClient};
use proxify_tui::traits::{DiagnosticSource, Severity};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RegistryClient {
    RegistryClient::new(Arc::new(ReqwestHttpClient::new()), &server.uri())
}

/// Run one load the way a mounted panel does and return what the setter saw.
async fn load_into_snapshot(
    client: &RegistryClient,
    sink: &RecordingSink,
    snapshot: &mut Vec<ApiEndpoint>,
) -> LoadOutcome {
    let mount = Mount::new(MountId::new(1));
    let token = mount.token();
    load(client, &token, sink, |endpoints| *snapshot = endpoints).await
}

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_fetch_sends_one_get_with_json_accept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(routes_json(3)))
        .expect(1)
        .mount(&server)
        .await;

    let registry = client_for(&server).fetch().await.unwrap();

    assert_eq!(registry.endpoints.len(), 3);
    assert!(registry.skipped.is_empty());
}

#[tokio::test]
async fn test_backend_order_is_kept_and_badge_applied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "name": "Zeta", "path": "/zeta", "target": "https://z.example.com" },
                { "name": "Self Host", "path": "/self-host", "target": "https://self.example.com" },
                { "name": "Alpha", "path": "/other", "target": "https://a.example.com", "model_map": {} }
            ]
        })))
        .mount(&server)
        .await;

    let sink = RecordingSink::new();
    let mut snapshot = Vec::new();
    let outcome = load_into_snapshot(&client_for(&server), &sink, &mut snapshot).await;

    assert_eq!(outcome, LoadOutcome::Applied { count: 3, skipped: 0 });
    let names: Vec<&str> = snapshot.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Self Host", "Alpha"]);
    assert_eq!(snapshot[1].badge, Some(BadgeKind::Verified));
    assert_eq!(snapshot[1].official_url, "https://self.example.com");
    assert_eq!(snapshot[2].badge, None);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(routes_json(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = RegistryClient::new(
        Arc::new(ReqwestHttpClient::new()),
        &format!("{}/", server.uri()),
    );
    assert_eq!(client.routes_url(), format!("{}/api/routes", server.uri()));
    assert!(client.fetch().await.is_ok());
}

#[tokio::test]
async fn test_malformed_entries_are_skipped_and_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "name": "OpenAI", "path": "/openai", "target": "https://api.openai.com" },
                { "name": "Broken", "path": "/broken" },
                { "name": 42, "path": "/num", "target": "https://x" },
                { "name": "Claude", "path": "/anthropic", "target": "https://api.anthropic.com" }
            ]
        })))
        .mount(&server)
        .await;

    let sink = RecordingSink::new();
    let mut snapshot = Vec::new();
    let outcome = load_into_snapshot(&client_for(&server), &sink, &mut snapshot).await;

    assert_eq!(outcome, LoadOutcome::Applied { count: 2, skipped: 2 });
    assert_eq!(snapshot[0].name, "OpenAI");
    assert_eq!(snapshot[1].name, "Claude");

    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics
        .iter()
        .all(|d| d.source == DiagnosticSource::RegistryEntry && d.severity == Severity::Warning));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_server_error_leaves_snapshot_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let sink = RecordingSink::new();
    let mut snapshot = Vec::new();
    let outcome = load_into_snapshot(&client_for(&server), &sink, &mut snapshot).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(snapshot.is_empty());

    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].source, DiagnosticSource::RegistryLoad);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].category, ErrorCategory::Server);
    assert!(diagnostics[0].message.starts_with("Failed to fetch routes"));
}

#[tokio::test]
async fn test_not_found_is_a_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch().await.unwrap_err();
    assert!(matches!(err, RegistryError::Status { status: 404, .. }));
    assert_eq!(err.category(), ErrorCategory::Client);
}

#[tokio::test]
async fn test_body_without_data_array_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "routes": [] })))
        .mount(&server)
        .await;

    let sink = RecordingSink::new();
    let mut snapshot = Vec::new();
    let outcome = load_into_snapshot(&client_for(&server), &sink, &mut snapshot).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(snapshot.is_empty());
    assert_eq!(sink.diagnostics()[0].category, ErrorCategory::Client);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_failure() {
    // Bind and immediately drop a listener to get a port nobody listens on.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let client = RegistryClient::new(Arc::new(ReqwestHttpClient::new()), &uri);

    let sink = RecordingSink::new();
    let mut snapshot = Vec::new();
    let outcome = load_into_snapshot(&client, &sink, &mut snapshot).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(snapshot.is_empty());
    assert_eq!(sink.diagnostics()[0].category, ErrorCategory::Network);
}

#[tokio::test]
async fn test_configured_timeout_fails_slow_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(routes_json(2))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let http = ReqwestHttpClient::with_timeout(Duration::from_millis(200)).unwrap();
    let client = RegistryClient::new(Arc::new(http), &server.uri());

    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, RegistryError::Transport { .. }));
    assert_eq!(err.category(), ErrorCategory::Network);
}
