// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! REST API client.
//!
//! Builds requests relative to the API base URL, routes them through the
//! [`Gateway`], and maps responses:
//! - 2xx with JSON body: decoded into the caller's type
//! - 2xx without body: `()`
//! - anything else: [`ClientError::Api`] with the server's validation messages

use crate::config::Config;
use crate::db::CredentialStore;
use crate::error::ClientError;
use crate::middleware::{Gateway, LogoutHook, OutgoingRequest};
use crate::services::refresh::HttpTokenRefresher;
use crate::services::session::Session;
use reqwest::{Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Low-level API client shared by the resource services.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    gateway: Arc<Gateway>,
}

impl ApiClient {
    pub fn new(base_url: Url, gateway: Arc<Gateway>) -> Self {
        Self { base_url, gateway }
    }

    /// Wire up the full stack (HTTP client, session, refresher, gateway).
    pub fn from_config(
        config: &Config,
        store: Arc<dyn CredentialStore>,
        logout_hook: Arc<dyn LogoutHook>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        let session = Arc::new(Session::load(store)?);
        let refresher = Arc::new(HttpTokenRefresher::new(http.clone(), &config.api_base_url)?);
        let gateway = Arc::new(Gateway::new(
            config,
            http,
            session,
            refresher,
            logout_hook,
        ));

        Ok(Self::new(config.api_base_url.clone(), gateway))
    }

    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }

    pub fn session(&self) -> &Arc<Session> {
        self.gateway.session()
    }

    /// `GET path`, JSON response.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let request = OutgoingRequest::new(Method::GET, self.url(path)?);
        let response = self.execute(request).await?;
        decode_json(response).await
    }

    /// `POST path` with a JSON body, JSON response.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = OutgoingRequest::new(Method::POST, self.url(path)?).with_json(to_json(body)?);
        let response = self.execute(request).await?;
        decode_json(response).await
    }

    /// `POST path` without credentials or token refresh (login, registration).
    pub async fn post_anonymous<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = OutgoingRequest::new(Method::POST, self.url(path)?).with_json(to_json(body)?);
        let response = self.execute_with(request, Credentialed::No).await?;
        decode_json(response).await
    }

    /// `PUT path` with a JSON body, response body ignored.
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let request = OutgoingRequest::new(Method::PUT, self.url(path)?).with_json(to_json(body)?);
        self.execute(request).await?;
        Ok(())
    }

    /// `DELETE path`, response body ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let request = OutgoingRequest::new(Method::DELETE, self.url(path)?);
        self.execute(request).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn execute(&self, request: OutgoingRequest) -> Result<reqwest::Response, ClientError> {
        self.execute_with(request, Credentialed::Yes).await
    }

    /// Send through the gateway and turn non-2xx statuses into errors.
    async fn execute_with(
        &self,
        request: OutgoingRequest,
        credentialed: Credentialed,
    ) -> Result<reqwest::Response, ClientError> {
        let method = request.method.clone();
        let url = request.url.clone();

        let sent = match credentialed {
            Credentialed::Yes => self.gateway.send(request).await,
            Credentialed::No => self.gateway.send_anonymous(request).await,
        };
        let response = sent.inspect_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
        })?;

        let status = response.status();
        tracing::debug!(method = %method, url = %url, status = %status, "API response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ClientError::from_response_body(status, &body);
        tracing::warn!(method = %method, url = %url, status = %status, error = %err, "API error");
        Err(err)
    }
}

#[derive(Debug, Clone, Copy)]
enum Credentialed {
    Yes,
    No,
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Decode(format!("Request body: {}", e)))
}

async fn decode_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
