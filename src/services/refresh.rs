// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token refresh call.
//!
//! The refresh request is sent with a plain HTTP client: it never goes through
//! the gateway and never carries a bearer header.

use crate::error::ClientError;
use crate::models::{Credentials, RefreshRequest, RefreshResponse};
use async_trait::async_trait;
use reqwest::Url;

/// Path of the refresh endpoint, relative to the API base URL.
pub const REFRESH_PATH: &str = "user/refresh";

/// Exchanges a refresh token for a new credential pair.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self, refresh_token: &str) -> Result<Credentials, ClientError>;
}

/// Refresher that calls `POST {base}/user/refresh`.
#[derive(Debug, Clone)]
pub struct HttpTokenRefresher {
    http: reqwest::Client,
    url: Url,
}

impl HttpTokenRefresher {
    pub fn new(http: reqwest::Client, api_base_url: &Url) -> Result<Self, ClientError> {
        let url = api_base_url
            .join(REFRESH_PATH)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl TokenRefresher for HttpTokenRefresher {
    async fn refresh(&self, refresh_token: &str) -> Result<Credentials, ClientError> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };

        let response = self.http.post(self.url.clone()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Token refresh rejected");
            return Err(ClientError::from_response_body(status, &body));
        }

        let tokens: RefreshResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(format!("Refresh response: {}", e)))?;

        Ok(tokens.into())
    }
}
