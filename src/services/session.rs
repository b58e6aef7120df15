// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state: the credential pair and user profile of the logged-in user.
//!
//! The session is the only owner of the credentials. It is shared through
//! `Arc<Session>` and mutated only by login/register, a successful refresh,
//! and logout. Every mutation is written through to the durable store.

use crate::db::{CredentialStore, StoredSession};
use crate::error::ClientError;
use crate::models::{Credentials, UserProfile, UserProfileToken};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Credential holder with a narrow `read` / `save` / `clear` API.
pub struct Session {
    store: Arc<dyn CredentialStore>,
    state: RwLock<StoredSession>,
}

impl Session {
    /// Create a session from whatever the store holds (process start).
    pub fn load(store: Arc<dyn CredentialStore>) -> Result<Self, ClientError> {
        let state = store.load()?;
        tracing::debug!(
            has_token = state.token.is_some(),
            has_user = state.user.is_some(),
            "Session loaded from store"
        );
        Ok(Self {
            store,
            state: RwLock::new(state),
        })
    }

    /// Current credential pair, if logged in.
    pub async fn read(&self) -> Option<Credentials> {
        self.state.read().await.credentials()
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.state.read().await.user.clone()
    }

    /// Logged in means a user profile is held.
    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    /// Replace the credential pair (refresh success), keeping the profile.
    ///
    /// The in-memory pair is updated even when persisting fails.
    pub async fn save(&self, credentials: Credentials) -> Result<(), ClientError> {
        let mut state = self.state.write().await;
        state.token = Some(credentials.access_token);
        state.refresh_token = Some(credentials.refresh_token);
        self.store.save(&state)
    }

    /// Store the result of a login or registration.
    pub async fn save_login(&self, login: UserProfileToken) -> Result<(), ClientError> {
        let mut state = self.state.write().await;
        *state = StoredSession {
            token: Some(login.access_token),
            refresh_token: Some(login.refresh_token),
            user: Some(login.user),
        };
        self.store.save(&state)
    }

    /// Forget everything, in memory and on disk.
    ///
    /// Memory is wiped even if the store fails.
    pub async fn clear(&self) -> Result<(), ClientError> {
        let mut state = self.state.write().await;
        *state = StoredSession::default();
        self.store.clear()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
