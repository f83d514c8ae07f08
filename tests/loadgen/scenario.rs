//! Session scenario against a stub API gateway.

use crate::stub_server::{StubRequest, StubResponse, StubServer};
use ingest_dispatch::SessionClient;
use ingest_loadgen::{run_scenario, ScenarioConfig};
use std::time::Duration;

fn gateway(request: &StubRequest) -> StubResponse {
    match (request.method.as_str(), request.path.as_str()) {
        ("POST", SessionClient::REGISTER_PATH) => StubResponse::ok(r#"{"id":1}"#),
        ("POST", SessionClient::LOGIN_PATH) => StubResponse::ok(r#"{"token":"tok-123"}"#),
        ("GET", path) if path.starts_with("/meta/projects/by-username/") => {
            if request.header("authorization") == Some("Bearer tok-123") {
                StubResponse::ok("[]")
            } else {
                StubResponse::new(401, "")
            }
        }
        _ => StubResponse::new(404, ""),
    }
}

fn quick_config(base_url: String, users: usize, iterations: u64) -> ScenarioConfig {
    let mut config = ScenarioConfig::new(base_url);
    config.users = users;
    config.iterations = iterations;
    config.wait_min = Duration::ZERO;
    config.wait_max = Duration::ZERO;
    config
}

#[tokio::test]
async fn test_users_register_login_and_browse() {
    let server = StubServer::start(gateway).await.unwrap();
    let config = quick_config(server.base_url(), 3, 5);

    let summary = run_scenario(&config).await.unwrap();

    assert_eq!(summary.users, 3);
    assert_eq!(summary.registrations_failed, 0);
    assert_eq!(summary.logins_failed, 0);
    assert_eq!(summary.browse_failed, 0);
    assert_eq!(summary.browse_ok + summary.health_checks, 15);

    let requests = server.requests();
    let registrations: Vec<_> = requests
        .iter()
        .filter(|r| r.path == SessionClient::REGISTER_PATH)
        .collect();
    assert_eq!(registrations.len(), 3);
    for registration in registrations {
        let body: serde_json::Value = serde_json::from_str(&registration.body).unwrap();
        let username = body["username"].as_str().unwrap();
        assert!(username.starts_with("loadtest_"));
        assert_eq!(body["email"], format!("{username}@example.com"));
        assert_eq!(body["password"], "password123");
    }
}

#[tokio::test]
async fn test_rejected_registration_browses_unauthenticated() {
    let server = StubServer::start(|request| {
        if request.path == SessionClient::REGISTER_PATH {
            StubResponse::new(409, r#"{"error":"exists"}"#)
        } else {
            gateway(request)
        }
    })
    .await
    .unwrap();
    let config = quick_config(server.base_url(), 2, 4);

    let summary = run_scenario(&config).await.unwrap();

    assert_eq!(summary.registrations_failed, 2);
    assert_eq!(summary.logins_failed, 0);
    assert_eq!(summary.users_aborted, 0);
    assert_eq!(summary.browse_ok, 0);
    assert_eq!(summary.browse_failed + summary.health_checks, 8);

    let requests = server.requests();
    assert!(requests.iter().all(|r| r.path != SessionClient::LOGIN_PATH));
    let browses: Vec<_> = requests
        .iter()
        .filter(|r| r.path.starts_with("/meta/projects/by-username/"))
        .collect();
    assert_eq!(browses.len() as u64, summary.browse_failed);
    assert!(browses.iter().all(|r| r.header("authorization").is_none()));
}

#[tokio::test]
async fn test_failed_login_browses_unauthenticated() {
    let server = StubServer::start(|request| {
        if request.path == SessionClient::LOGIN_PATH {
            StubResponse::new(401, "")
        } else {
            gateway(request)
        }
    })
    .await
    .unwrap();
    let config = quick_config(server.base_url(), 1, 8);

    let summary = run_scenario(&config).await.unwrap();

    assert_eq!(summary.logins_failed, 1);
    assert_eq!(summary.browse_ok, 0);
    assert_eq!(summary.browse_failed + summary.health_checks, 8);
}

#[tokio::test]
async fn test_invalid_base_url_fails_fast() {
    let config = quick_config("not a url".to_string(), 2, 1);
    assert!(run_scenario(&config).await.is_err());
}
