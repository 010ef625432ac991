//! Shared helpers for the AGIdentity conformance test suite.
//!
//! Every helper returns a base URL that the blocking client can be pointed
//! at from an ordinary `#[test]`:
//!
//! - [`spawn_service`] — full mock service with its own identity and vault.
//! - [`spawn_stub`] — canned JSON on fixed routes, for exact-value checks.
//! - [`spawn_raw_stub`] — an arbitrary `200 OK` body with a chosen content type.
//! - [`closed_port_url`] — nothing listening; connections are refused.
//! - [`silent_listener`] — accepts connections but never answers.

use std::net::TcpListener;
use std::time::Duration;

use agidentity_client::{ClientConfig, IdentityServiceClient};
use agidentity_mock::{serve_on_thread, spawn_blocking_server, MockConfig, MockServer};
use axum::{http::header, routing::get, Json, Router};
use serde_json::Value;

/// Balance every spawned mock service reports.
pub const TEST_BALANCE: u64 = 21_000;

/// Start a mock service on an ephemeral port.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub fn spawn_service() -> MockServer {
    spawn_blocking_server(MockConfig {
        balance: TEST_BALANCE,
        ..MockConfig::default()
    })
    .expect("spawn mock service")
}

/// Serve `body` as JSON from `GET path` and return the base URL.
pub fn spawn_stub(path: &str, body: Value) -> String {
    let router = Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    serve_on_thread(router).expect("spawn stub service")
}

/// Serve `body` verbatim with `content_type` from `GET path` and return the
/// base URL.
pub fn spawn_raw_stub(path: &str, content_type: &'static str, body: &'static str) -> String {
    let router = Router::new().route(
        path,
        get(move || async move { ([(header::CONTENT_TYPE, content_type)], body) }),
    );
    serve_on_thread(router).expect("spawn raw stub service")
}

/// A URL on `127.0.0.1` whose port was just released, so nothing listens.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

/// A bound listener that is never accepted from. Connections complete in
/// the kernel backlog but no response ever arrives. Keep the returned
/// listener alive for the duration of the test.
pub fn silent_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    (listener, format!("http://{addr}"))
}

/// Client against `base_url` with a short timeout suitable for tests.
pub fn client_for(base_url: &str) -> IdentityServiceClient {
    IdentityServiceClient::new(ClientConfig::new(base_url).with_timeout(Duration::from_secs(2)))
        .expect("build client")
}
