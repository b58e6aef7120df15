// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated request gateway.
//!
//! Every API call passes through [`Gateway::authorize`] before it is sent:
//! 1. No access token held: forward anonymously
//! 2. Token still valid: attach `Authorization: Bearer <token>` and forward
//! 3. Token expired: refresh once, persist the new pair, attach, forward
//! 4. Refresh failed: wipe the session, fire the logout hook, fail the request
//!    with the refresh error
//!
//! Concurrent requests that all see an expired token are coalesced behind a
//! single refresh lock; only the first one calls the refresh endpoint.

use crate::config::Config;
use crate::error::ClientError;
use crate::middleware::auth::{access_token_expiry, is_expired};
use crate::models::Credentials;
use crate::services::refresh::TokenRefresher;
use crate::services::session::Session;
use crate::time_utils::{format_unix_rfc3339, now_unix};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Request as seen by the gateway, before it is handed to the HTTP client.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl OutgoingRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(body);
        self
    }

    /// Bearer token currently attached, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
    }

    fn attach_bearer(&mut self, token: &str) -> Result<(), ClientError> {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ClientError::InvalidToken("token is not a valid header value".into()))?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Terminal state of a request passing through the gateway.
#[derive(Debug)]
pub enum GatewayOutcome {
    /// Ready to send (with or without a bearer credential)
    Forwarded(OutgoingRequest),
    /// Authentication is unrecoverable; the session has been ended
    Failed(ClientError),
}

impl GatewayOutcome {
    pub fn into_result(self) -> Result<OutgoingRequest, ClientError> {
        match self {
            GatewayOutcome::Forwarded(request) => Ok(request),
            GatewayOutcome::Failed(err) => Err(err),
        }
    }
}

/// Why the session ended.
#[derive(Debug)]
pub enum LogoutReason<'a> {
    /// The user asked to log out
    Requested,
    /// A token refresh failed with this error
    RefreshFailed(&'a ClientError),
}

/// Side effect fired whenever the session ends (navigation to the login surface).
pub trait LogoutHook: Send + Sync {
    fn on_logout(&self, reason: &LogoutReason<'_>);
}

/// Default hook for the command line: point the user back at `login`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginRedirect;

impl LogoutHook for LoginRedirect {
    fn on_logout(&self, reason: &LogoutReason<'_>) {
        match reason {
            LogoutReason::Requested => tracing::info!("Logged out successfully"),
            LogoutReason::RefreshFailed(err) => tracing::warn!(
                error = %err,
                "Session expired, please log in again (workout-tracker login)"
            ),
        }
    }
}

/// Wraps outgoing requests with bearer attachment and token refresh.
pub struct Gateway {
    http: reqwest::Client,
    session: Arc<Session>,
    refresher: Arc<dyn TokenRefresher>,
    logout_hook: Arc<dyn LogoutHook>,
    /// Serializes refreshes so concurrent expired requests share one call.
    refresh_lock: Mutex<()>,
    refresh_timeout: Duration,
    expiry_leeway_secs: i64,
}

impl Gateway {
    pub fn new(
        config: &Config,
        http: reqwest::Client,
        session: Arc<Session>,
        refresher: Arc<dyn TokenRefresher>,
        logout_hook: Arc<dyn LogoutHook>,
    ) -> Self {
        Self {
            http,
            session,
            refresher,
            logout_hook,
            refresh_lock: Mutex::new(()),
            refresh_timeout: config.refresh_timeout,
            expiry_leeway_secs: i64::try_from(config.expiry_leeway.as_secs())
                .unwrap_or(i64::MAX),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Decide what happens to `request`: forward it (possibly after a
    /// refresh) or fail it.
    pub async fn authorize(&self, mut request: OutgoingRequest) -> GatewayOutcome {
        let Some(credentials) = self.session.read().await else {
            tracing::debug!(
                method = %request.method,
                url = %request.url,
                "No credentials, forwarding anonymously"
            );
            return GatewayOutcome::Forwarded(request);
        };

        let token = if self.expired(&credentials.access_token) {
            match self.refreshed_access_token(&credentials.access_token).await {
                Ok(token) => token,
                Err(e) => return GatewayOutcome::Failed(e),
            }
        } else {
            credentials.access_token
        };

        match request.attach_bearer(&token) {
            Ok(()) => GatewayOutcome::Forwarded(request),
            Err(e) => GatewayOutcome::Failed(e),
        }
    }

    /// Authorize and send `request`.
    pub async fn send(&self, request: OutgoingRequest) -> Result<reqwest::Response, ClientError> {
        let request = self.authorize(request).await.into_result()?;
        self.dispatch(request).await
    }

    /// Send `request` as is, without reading the session or refreshing.
    ///
    /// Login and registration use this so that a stale stored session cannot
    /// get in the way of replacing it.
    pub async fn send_anonymous(
        &self,
        request: OutgoingRequest,
    ) -> Result<reqwest::Response, ClientError> {
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: OutgoingRequest) -> Result<reqwest::Response, ClientError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        Ok(builder.send().await?)
    }

    /// End the session on the user's request.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = self.session.clear().await;
        self.logout_hook.on_logout(&LogoutReason::Requested);
        result
    }

    fn expired(&self, access_token: &str) -> bool {
        is_expired(access_token, now_unix(), self.expiry_leeway_secs)
    }

    /// Obtain a fresh access token to replace `stale`.
    async fn refreshed_access_token(&self, stale: &str) -> Result<String, ClientError> {
        let _guard = self.refresh_lock.lock().await;

        // Re-check after the lock: another request may have refreshed, or
        // failed and logged out, while we waited.
        let Some(current) = self.session.read().await else {
            return Err(ClientError::SessionEnded);
        };
        if current.access_token != stale && !self.expired(&current.access_token) {
            tracing::debug!("Token already refreshed by a concurrent request");
            return Ok(current.access_token);
        }

        let expires_at = access_token_expiry(&current.access_token)
            .map(format_unix_rfc3339)
            .unwrap_or_else(|_| "unreadable".to_string());
        tracing::info!(expires_at = %expires_at, "Access token expired, refreshing");

        match self.refresh(&current).await {
            Ok(new_credentials) => {
                let token = new_credentials.access_token.clone();
                if let Err(e) = self.session.save(new_credentials).await {
                    tracing::warn!(error = %e, "Failed to persist refreshed credentials");
                }
                tracing::info!("Token refreshed");
                Ok(token)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token refresh failed, logging out");
                if let Err(clear_err) = self.session.clear().await {
                    tracing::error!(error = %clear_err, "Failed to clear stored credentials");
                }
                self.logout_hook.on_logout(&LogoutReason::RefreshFailed(&e));
                Err(e)
            }
        }
    }

    /// One refresh call, bounded by the configured timeout. Never retried.
    async fn refresh(&self, credentials: &Credentials) -> Result<Credentials, ClientError> {
        if credentials.refresh_token.is_empty() {
            return Err(ClientError::MissingRefreshToken);
        }

        match tokio::time::timeout(
            self.refresh_timeout,
            self.refresher.refresh(&credentials.refresh_token),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ClientError::RefreshTimeout(self.refresh_timeout)),
        }
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("refresh_timeout", &self.refresh_timeout)
            .field("expiry_leeway_secs", &self.expiry_leeway_secs)
            .finish_non_exhaustive()
    }
}
