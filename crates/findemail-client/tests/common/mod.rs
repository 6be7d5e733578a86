//! Shared helpers for the wiremock-backed client tests.
//!
//! The client is blocking, so every call into it runs on tokio's blocking
//! pool while the mock server keeps serving on the async workers.

#![allow(dead_code)]

use findemail_client::{FindEmailClient, FindEmailClientBuilder};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "9F2C4B1A-3D5E-4F60-8A7B-1C2D3E4F5A6B";

/// Builder pointed at the mock server with fast retries and no status check
pub fn builder(server: &MockServer) -> FindEmailClientBuilder {
    FindEmailClient::builder(API_KEY)
        .base_url(server.uri())
        .request_retries(3)
        .retry_delay(Duration::from_millis(10))
        .timeout(Duration::from_secs(5))
        .verify_on_build(false)
}

/// Run a blocking closure off the async workers.
///
/// Anything owning a blocking client must be dropped inside `f`.
pub async fn blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

pub fn envelope_ok(data: Value) -> Value {
    json!({"ok": true, "data": data, "message": ""})
}

pub fn envelope_err(message: &str) -> Value {
    json!({"ok": false, "data": null, "message": message})
}

/// Answer `verb path` with `status` and a JSON body, expecting `times` hits
pub async fn mount_json(
    server: &MockServer,
    verb: &str,
    route: &str,
    status: u16,
    body: Value,
    times: u64,
) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}
