//! HTTP dispatcher against a loopback stub server.

use crate::stub_server::{StubResponse, StubServer};
use ingest_dispatch::{DispatchConfig, DispatchResult, Dispatcher, HttpDispatcher};
use ingest_generator::{RecordGenerator, Shape, ShapeSelector};
use ingest_loadgen::{run_load, LoadPlan};
use std::sync::Arc;

#[tokio::test]
async fn test_posts_envelope_with_headers() {
    let server = StubServer::start(|_| StubResponse::new(201, "{}"))
        .await
        .unwrap();
    let config = DispatchConfig::new(server.url("/ingest"))
        .with_auth_token("secret-key")
        .with_header("X-Project", "demo");
    let dispatcher = HttpDispatcher::new(&config).unwrap();

    let envelope = RecordGenerator::new(42).envelope(ShapeSelector::Fixed(Shape::User));
    let result = dispatcher.send(&envelope).await;
    assert_eq!(result, DispatchResult::Status(201));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/ingest");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("authorization"), Some("secret-key"));
    assert_eq!(request.header("x-project"), Some("demo"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["schema_name"], "user");
    assert!(body["data"]["user_id"].is_string());
    assert!(body["data"]["age"].is_i64());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = StubServer::start(|_| StubResponse::ok("")).await.unwrap();
    let dispatcher = HttpDispatcher::new(&DispatchConfig::new(server.url("/ingest"))).unwrap();

    let envelope = RecordGenerator::new(1).envelope(ShapeSelector::Mixed);
    assert!(dispatcher.send(&envelope).await.is_success());

    let requests = server.requests();
    assert_eq!(requests[0].header("authorization"), None);
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = StubServer::start(|_| StubResponse::new(503, r#"{"error":"busy"}"#))
        .await
        .unwrap();
    let config = DispatchConfig::new(server.url("/ingest")).with_capture_body(true);
    let dispatcher = HttpDispatcher::new(&config).unwrap();

    let envelope = RecordGenerator::new(3).envelope(ShapeSelector::Mixed);
    let result = dispatcher.send(&envelope).await;

    assert_eq!(result, DispatchResult::Status(503));
    assert!(!result.is_success());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Grab a free port, then close it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dispatcher =
        HttpDispatcher::new(&DispatchConfig::new(format!("http://{addr}/ingest"))).unwrap();
    let envelope = RecordGenerator::new(4).envelope(ShapeSelector::Mixed);

    let result = dispatcher.send(&envelope).await;
    assert!(matches!(result, DispatchResult::Error(_)));
    assert_eq!(result.status(), None);
}

#[tokio::test]
async fn test_load_run_over_http() {
    let server = StubServer::start(|request| {
        if request.body.contains("\"schema_name\":\"event\"") {
            StubResponse::new(202, "")
        } else {
            StubResponse::new(400, "")
        }
    })
    .await
    .unwrap();
    let dispatcher = HttpDispatcher::new(&DispatchConfig::new(server.url("/ingest"))).unwrap();
    let plan = LoadPlan::new(25, 5, ShapeSelector::Fixed(Shape::Event)).with_seed(8);

    let summary = run_load(&plan, Arc::new(dispatcher)).await.unwrap();

    assert_eq!(summary.successes, 25);
    assert_eq!(summary.status_counts.get(&202), Some(&25));
    assert_eq!(server.requests().len(), 25);
}
