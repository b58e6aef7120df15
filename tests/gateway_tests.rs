// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated request gateway tests.
//!
//! These tests run the full client against a mock REST backend and verify:
//! 1. Anonymous requests carry no Authorization header
//! 2. Valid tokens are attached unchanged with no refresh call
//! 3. Expired tokens trigger exactly one refresh, even under concurrency
//! 4. Refresh failures wipe the session, fire the logout hook, and surface
//!    the refresh error to the caller

use futures_util::future::join_all;
use reqwest::{Method, StatusCode, Url};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workout_tracker::db::{MemoryCredentialStore, StoredSession};
use workout_tracker::error::ClientError;
use workout_tracker::middleware::{GatewayOutcome, OutgoingRequest};

mod common;
use common::{access_token, seeded_store, test_client, test_config, LogoutRecorder};

async fn mount_exercises(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/exercises/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_anonymous_request_has_no_authorization() {
    let server = MockServer::start().await;
    mount_exercises(&server).await;

    let recorder = LogoutRecorder::default();
    let client = test_client(
        &test_config(&server.uri()),
        &MemoryCredentialStore::new(),
        &recorder,
    );

    let exercises = client.exercises.list().await.unwrap();
    assert!(exercises.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn test_authorize_without_token_forwards_unmodified() {
    let recorder = LogoutRecorder::default();
    let client = test_client(
        &test_config("http://127.0.0.1:9"),
        &MemoryCredentialStore::new(),
        &recorder,
    );

    let url = Url::parse("http://127.0.0.1:9/api/exercises/").unwrap();
    let outcome = client
        .api
        .gateway()
        .authorize(OutgoingRequest::new(Method::GET, url.clone()))
        .await;

    match outcome {
        GatewayOutcome::Forwarded(request) => {
            assert_eq!(request.url, url);
            assert!(request.headers.is_empty());
            assert!(request.bearer_token().is_none());
        }
        GatewayOutcome::Failed(e) => panic!("anonymous request failed: {e}"),
    }
}

#[tokio::test]
async fn test_valid_token_attached_without_refresh() {
    let server = MockServer::start().await;
    let token = access_token("user-1", 3600);

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/exercises/"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store(&token, "R1");
    let recorder = LogoutRecorder::default();
    let client = test_client(&test_config(&server.uri()), &store, &recorder);

    client.exercises.list().await.unwrap();

    assert_eq!(store.snapshot().token.as_deref(), Some(token.as_str()));
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn test_expired_token_refreshed_then_forwarded() {
    let server = MockServer::start().await;
    let expired = access_token("user-1", -10);

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .and(body_json(json!({ "refreshToken": "R1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": "T2", "refreshToken": "R2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/exercises/"))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store(&expired, "R1");
    let recorder = LogoutRecorder::default();
    let client = test_client(&test_config(&server.uri()), &store, &recorder);

    client.exercises.list().await.unwrap();

    // Both new tokens replaced the old ones, durably and in memory
    let stored = store.snapshot();
    assert_eq!(stored.token.as_deref(), Some("T2"));
    assert_eq!(stored.refresh_token.as_deref(), Some("R2"));
    assert!(stored.user.is_some(), "profile survives a refresh");

    let held = client.api.session().read().await.unwrap();
    assert_eq!(held.access_token, "T2");
    assert_eq!(held.refresh_token, "R2");
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn test_refresh_request_never_carries_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": access_token("user-1", 3600),
            "refreshToken": "R2"
        })))
        .mount(&server)
        .await;
    mount_exercises(&server).await;

    let store = seeded_store(&access_token("user-1", -10), "R1");
    let client = test_client(
        &test_config(&server.uri()),
        &store,
        &LogoutRecorder::default(),
    );

    client.exercises.list().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let refresh = requests
        .iter()
        .find(|r| r.url.path() == "/api/user/refresh")
        .expect("refresh call was made");
    assert!(refresh.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_refresh_401_logs_out_and_fails_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid refresh token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/exercises/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let store = seeded_store(&access_token("user-1", -10), "R1");
    let recorder = LogoutRecorder::default();
    let client = test_client(&test_config(&server.uri()), &store, &recorder);

    let err = client.exercises.list().await.unwrap_err();

    match &err {
        ClientError::Api {
            status, message, ..
        } => {
            assert_eq!(*status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Invalid refresh token");
        }
        other => panic!("expected the refresh 401, got {other:?}"),
    }

    assert!(store.snapshot().is_empty(), "durable storage cleared");
    assert!(client.api.session().read().await.is_none());
    assert!(client.api.session().user().await.is_none());
    assert_eq!(recorder.count(), 1);
    assert!(recorder
        .last_reason()
        .unwrap()
        .starts_with("refresh_failed"));
}

#[tokio::test]
async fn test_concurrent_expired_requests_share_one_refresh() {
    let server = MockServer::start().await;
    let fresh = access_token("user-1", 3600);

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": fresh, "refreshToken": "R2" }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/exercises/"))
        .and(header("authorization", format!("Bearer {}", fresh).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(5)
        .mount(&server)
        .await;

    let store = seeded_store(&access_token("user-1", -10), "R1");
    let client = test_client(
        &test_config(&server.uri()),
        &store,
        &LogoutRecorder::default(),
    );

    let results = join_all((0..5).map(|_| client.exercises.list())).await;
    for result in results {
        result.unwrap();
    }

    assert_eq!(store.snapshot().refresh_token.as_deref(), Some("R2"));
}

#[tokio::test]
async fn test_concurrent_waiters_see_session_ended_after_failed_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(100)))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store(&access_token("user-1", -10), "R1");
    let recorder = LogoutRecorder::default();
    let client = test_client(&test_config(&server.uri()), &store, &recorder);

    let results = join_all((0..3).map(|_| client.exercises.list())).await;

    let unauthorized = results
        .iter()
        .filter(|r| matches!(r, Err(e) if e.is_unauthorized()))
        .count();
    let ended = results
        .iter()
        .filter(|r| matches!(r, Err(ClientError::SessionEnded)))
        .count();

    assert_eq!(unauthorized, 1);
    assert_eq!(ended, 2);
    assert_eq!(recorder.count(), 1, "logout fires once");
}

#[tokio::test]
async fn test_hanging_refresh_times_out_and_logs_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": "T2", "refreshToken": "R2" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.refresh_timeout = Duration::from_millis(200);

    let store = seeded_store(&access_token("user-1", -10), "R1");
    let recorder = LogoutRecorder::default();
    let client = test_client(&config, &store, &recorder);

    let err = client.exercises.list().await.unwrap_err();

    assert!(matches!(err, ClientError::RefreshTimeout(d) if d == Duration::from_millis(200)));
    assert!(store.snapshot().is_empty());
    assert_eq!(recorder.count(), 1);
}

#[tokio::test]
async fn test_malformed_token_triggers_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": "T2", "refreshToken": "R2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/exercises/"))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("definitely-not-a-jwt", "R1");
    let client = test_client(
        &test_config(&server.uri()),
        &store,
        &LogoutRecorder::default(),
    );

    client.exercises.list().await.unwrap();
}

#[tokio::test]
async fn test_missing_refresh_token_logs_out_without_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = MemoryCredentialStore::with_session(StoredSession {
        token: Some(access_token("user-1", -10)),
        refresh_token: None,
        user: Some(common::test_user()),
    });
    let recorder = LogoutRecorder::default();
    let client = test_client(&test_config(&server.uri()), &store, &recorder);

    let err = client.exercises.list().await.unwrap_err();

    assert!(matches!(err, ClientError::MissingRefreshToken));
    assert!(store.snapshot().is_empty());
    assert_eq!(recorder.count(), 1);
}

#[tokio::test]
async fn test_expiry_leeway_refreshes_early() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": access_token("user-1", 3600),
            "refreshToken": "R2"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_exercises(&server).await;

    let mut config = test_config(&server.uri());
    config.expiry_leeway = Duration::from_secs(60);

    // Still valid for 30s, but inside the 60s leeway
    let store = seeded_store(&access_token("user-1", 30), "R1");
    let client = test_client(&config, &store, &LogoutRecorder::default());

    client.exercises.list().await.unwrap();
    assert_eq!(store.snapshot().refresh_token.as_deref(), Some("R2"));
}
