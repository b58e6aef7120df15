// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use workout_tracker::config::Config;
use workout_tracker::db::{MemoryCredentialStore, StoredSession};
use workout_tracker::middleware::{LogoutHook, LogoutReason};
use workout_tracker::models::UserProfile;
use workout_tracker::WorkoutClient;

/// Mint an access token expiring `offset_secs` from now (negative = expired).
///
/// Signed with a key the client never sees, like a real server token.
#[allow(dead_code)]
pub fn access_token(sub: &str, offset_secs: i64) -> String {
    #[derive(Serialize)]
    struct Claims {
        sub: String,
        exp: i64,
        iat: i64,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub: sub.to_string(),
            exp: now + offset_secs,
            iat: now,
        },
        &EncodingKey::from_secret(b"server_signing_key_32_bytes_long!"),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn test_user() -> UserProfile {
    UserProfile {
        email: "sam@example.com".to_string(),
        user_name: "sam".to_string(),
    }
}

/// Store pre-seeded with a logged-in session.
#[allow(dead_code)]
pub fn seeded_store(access: &str, refresh: &str) -> MemoryCredentialStore {
    MemoryCredentialStore::with_session(StoredSession {
        token: Some(access.to_string()),
        refresh_token: Some(refresh.to_string()),
        user: Some(test_user()),
    })
}

/// Test config pointing at a mock server's `/api/` prefix.
#[allow(dead_code)]
pub fn test_config(server_uri: &str) -> Config {
    Config::default()
        .with_base_url(&format!("{}/api/", server_uri))
        .expect("mock server URI is valid")
}

/// Records every logout hook invocation.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct LogoutRecorder {
    calls: Arc<AtomicUsize>,
    last_reason: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl LogoutRecorder {
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_reason(&self) -> Option<String> {
        self.last_reason.lock().unwrap().clone()
    }
}

impl LogoutHook for LogoutRecorder {
    fn on_logout(&self, reason: &LogoutReason<'_>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let label = match reason {
            LogoutReason::Requested => "requested".to_string(),
            LogoutReason::RefreshFailed(err) => format!("refresh_failed: {}", err),
        };
        *self.last_reason.lock().unwrap() = Some(label);
    }
}

/// Build a client over `store` talking to the mock server.
#[allow(dead_code)]
pub fn test_client(
    config: &Config,
    store: &MemoryCredentialStore,
    recorder: &LogoutRecorder,
) -> WorkoutClient {
    WorkoutClient::from_config(config, Arc::new(store.clone()), Arc::new(recorder.clone()))
        .expect("client should build")
}
