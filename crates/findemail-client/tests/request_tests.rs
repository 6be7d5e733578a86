//! Request executor, retry and endpoint caller tests against a mock server.

mod common;

use common::*;
use findemail_client::{FindEmailClient, FindEmailError, Method, USER_AGENT};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn sends_required_headers() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/v1/user/info", 200, envelope_ok(json!({})), 1).await;

    let b = builder(&server);
    blocking(move || {
        let client = b.build().unwrap();
        client.user().info().unwrap();
    })
    .await;

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    let header = |name: &str| headers.get(name).unwrap().to_str().unwrap().to_string();

    assert_eq!(header("x-api-key"), API_KEY);
    assert_eq!(header("accept"), "application/json,*/*");
    assert_eq!(header("content-type"), "application/json");
    assert_eq!(header("user-agent"), USER_AGENT);
    assert!(USER_AGENT.starts_with("findemail-"));
}

#[tokio::test(flavor = "multi_thread")]
async fn build_checks_key_against_service() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/v1/user/info", 200, envelope_ok(json!({})), 1).await;

    let b = builder(&server).verify_on_build(true);
    let built = blocking(move || b.build().map(|_| ())).await;
    assert!(built.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn build_fails_when_service_rejects_key() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/v1/user/info", 401, json!({}), 1).await;

    let b = builder(&server).verify_on_build(true);
    let built = blocking(move || b.build().map(|_| ())).await;
    assert!(matches!(built, Err(FindEmailError::ApiKey)));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_key_fails_before_any_request() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/v1/user/info", 200, envelope_ok(json!({})), 0).await;

    let uri = server.uri();
    let built = blocking(move || {
        FindEmailClient::builder("9f2c4b1a-3d5e-4f60-8a7b-1c2d3e4f5a6b")
            .base_url(uri)
            .build()
            .map(|_| ())
    })
    .await;
    assert!(matches!(built, Err(FindEmailError::ApiKey)));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_retry_settings_fail_construction() {
    let server = MockServer::start().await;

    let zero_retries = builder(&server).request_retries(0);
    let zero_delay = builder(&server).retry_delay(Duration::ZERO);
    let (a, b) = blocking(move || {
        (
            zero_retries.build().map(|_| ()),
            zero_delay.build().map(|_| ()),
        )
    })
    .await;

    assert!(matches!(a, Err(FindEmailError::Config(_))));
    assert!(matches!(b, Err(FindEmailError::Config(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn status_codes_map_to_taxonomy() {
    let cases: [(u16, fn(&FindEmailError) -> bool); 6] = [
        (401, |e| matches!(e, FindEmailError::ApiKey)),
        (403, |e| matches!(e, FindEmailError::AccessForbidden(m) if m == "server says 403")),
        (404, |e| matches!(e, FindEmailError::NotFound)),
        (405, |e| matches!(e, FindEmailError::MethodNotAllowed(m) if m == "server says 405")),
        (422, |e| matches!(e, FindEmailError::InvalidInput)),
        (429, |e| matches!(e, FindEmailError::FloodWait(m) if m == "server says 429")),
    ];

    for (status, check) in cases {
        let server = MockServer::start().await;
        let body = envelope_err(&format!("server says {status}"));
        // definitive errors are never retried
        mount_json(&server, "POST", "/v1/search/domain", status, body, 1).await;

        let b = builder(&server);
        let result = blocking(move || {
            let client = b.build().unwrap();
            client.search().domain("example.com")
        })
        .await;

        let err = result.unwrap_err();
        assert!(check(&err), "status {status} mapped to {err:?}");
        assert_eq!(err.status_code(), Some(status));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unexpected_status_is_unknown_and_not_retried() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/v1/user/info", 502, json!({}), 1).await;

    let b = builder(&server);
    let result = blocking(move || b.build().unwrap().user().info()).await;
    assert!(matches!(result, Err(FindEmailError::Unknown(502))));
}

#[tokio::test(flavor = "multi_thread")]
async fn error_message_falls_back_to_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/info"))
        .respond_with(ResponseTemplate::new(403).set_body_string("banned"))
        .mount(&server)
        .await;

    let b = builder(&server);
    let result = blocking(move || b.build().unwrap().user().info()).await;
    assert!(matches!(result, Err(FindEmailError::AccessForbidden(m)) if m == "banned"));
}

#[tokio::test(flavor = "multi_thread")]
async fn executor_returns_envelope_for_200_and_400() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/v1/user/info", 200, envelope_ok(json!({"credit": 3})), 1).await;
    mount_json(&server, "POST", "/v1/search/domain", 400, envelope_err("bad domain"), 1).await;

    let b = builder(&server);
    let (ok, bad) = blocking(move || {
        let client = b.build().unwrap();
        (
            client.execute::<()>(Method::GET, "/v1/user/info", None),
            client.execute(Method::POST, "/v1/search/domain", Some(&json!({"domain": "x"}))),
        )
    })
    .await;

    let ok = ok.unwrap();
    assert!(ok.ok);
    assert_eq!(ok.data, json!({"credit": 3}));

    let bad = bad.unwrap();
    assert!(!bad.ok);
    assert_eq!(bad.message.as_deref(), Some("bad domain"));
}

#[tokio::test(flavor = "multi_thread")]
async fn is_valid_reports_ok_flag() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/v1/user/info", 400, envelope_err("expired"), 1).await;

    let b = builder(&server);
    let valid = blocking(move || b.build().unwrap().is_valid()).await;
    assert!(!valid.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn endpoint_callers_send_bodies_and_unwrap_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/search/domain"))
        .and(body_json(json!({"domain": "example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_ok(json!(["a@example.com"]))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/search/leak"))
        .and(body_json(json!({"type": "phone_number", "data": "+15550100"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_ok(json!({"count": 2}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/search/logs"))
        .and(body_json(json!({"type": "sub_domain", "data": "mail.example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_ok(json!({"count": 7}))))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "GET", "/v1/user/info", 200, envelope_ok(json!({"plan": "pro"})), 1).await;

    let b = builder(&server);
    let (domain, leak, logs, info) = blocking(move || {
        let client = b.build().unwrap();
        let search = client.search();
        (
            search.domain("example.com").unwrap(),
            search.leak("+15550100", "phone_number").unwrap(),
            search.logs("mail.example.com", "sub_domain").unwrap(),
            client.user().info().unwrap(),
        )
    })
    .await;

    assert_eq!(domain, json!(["a@example.com"]));
    assert_eq!(leak, json!({"count": 2}));
    assert_eq!(logs, json!({"count": 7}));
    assert_eq!(info, json!({"plan": "pro"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn not_ok_envelope_is_validation_error_for_every_caller() {
    for status in [200, 400] {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/v1/user/info", status, envelope_err("nope"), 1).await;
        mount_json(&server, "POST", "/v1/search/domain", status, envelope_err("nope"), 1).await;
        mount_json(&server, "POST", "/v1/search/leak", status, envelope_err("nope"), 1).await;
        mount_json(&server, "POST", "/v1/search/logs", status, envelope_err("nope"), 1).await;

        let b = builder(&server);
        let results = blocking(move || {
            let client = b.build().unwrap();
            vec![
                client.user().info(),
                client.search().domain("example.com"),
                client.search().leak("someone@example.com", "email"),
                client.search().logs("nginx", "tech"),
            ]
        })
        .await;

        for result in results {
            assert!(
                matches!(&result, Err(FindEmailError::Validation(m)) if m == "nope"),
                "status {status}: {result:?}"
            );
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_search_type_sends_nothing() {
    let server = MockServer::start().await;
    mount_json(&server, "POST", "/v1/search/leak", 200, envelope_ok(json!({})), 0).await;
    mount_json(&server, "POST", "/v1/search/logs", 200, envelope_ok(json!({})), 0).await;

    let b = builder(&server);
    let (leak, logs) = blocking(move || {
        let client = b.build().unwrap();
        (
            client.search().leak("10.0.0.1", "port"),
            client.search().logs("someone@example.com", "email"),
        )
    })
    .await;

    assert!(matches!(leak, Err(FindEmailError::InvalidType(m)) if m == "invalid search type!"));
    assert!(matches!(logs, Err(FindEmailError::InvalidType(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn unparseable_body_is_retried_until_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(3)
        .mount(&server)
        .await;

    let b = builder(&server);
    let result = blocking(move || b.build().unwrap().user().info()).await;

    match result {
        Err(FindEmailError::RetriesExhausted { attempts, source }) => {
            assert_eq!(attempts, 3);
            assert!(matches!(*source, FindEmailError::Json(_)));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn transient_failure_then_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "GET", "/v1/user/info", 200, envelope_ok(json!({"plan": "free"})), 1).await;

    let b = builder(&server);
    let info = blocking(move || b.build().unwrap().user().info()).await;
    assert_eq!(info.unwrap(), json!({"plan": "free"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_response_times_out_each_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope_ok(json!({})))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let b = builder(&server)
        .request_retries(2)
        .timeout(Duration::from_millis(200));
    let result = blocking(move || b.build().unwrap().user().info()).await;

    match result {
        Err(FindEmailError::RetriesExhausted { attempts: 2, source }) => {
            assert!(matches!(*source, FindEmailError::Timeout(_)), "{source:?}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_service_exhausts_retries() {
    let result = blocking(|| {
        FindEmailClient::builder(API_KEY)
            .base_url("http://127.0.0.1:1")
            .request_retries(2)
            .retry_delay(Duration::from_millis(10))
            .build()
            .map(|_| ())
    })
    .await;

    assert!(matches!(
        result,
        Err(FindEmailError::RetriesExhausted { attempts: 2, .. })
    ));
}
