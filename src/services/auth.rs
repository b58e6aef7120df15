// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration and logout.

use crate::error::ClientError;
use crate::models::{LoginRequest, RegisterRequest, UserProfile, UserProfileToken};
use crate::services::api::ApiClient;

/// Account operations; successful logins populate the session.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST user/login`, then save credentials and profile.
    ///
    /// Sent without the stored session, so an expired one is simply replaced.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: UserProfileToken = self.api.post_anonymous("user/login", &request).await?;
        self.store_login(response).await
    }

    /// `POST user/register`, then save credentials and profile.
    pub async fn register(
        &self,
        email: &str,
        user_name: &str,
        password: &str,
    ) -> Result<UserProfile, ClientError> {
        let request = RegisterRequest {
            email: email.to_string(),
            user_name: user_name.to_string(),
            password: password.to_string(),
        };

        let response: UserProfileToken = self.api.post_anonymous("user/register", &request).await?;
        self.store_login(response).await
    }

    /// Clear the session and fire the logout hook.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.api.gateway().logout().await
    }

    /// Profile of the logged-in user.
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.api.session().user().await
    }

    async fn store_login(&self, response: UserProfileToken) -> Result<UserProfile, ClientError> {
        let user = response.user.clone();
        self.api.session().save_login(response).await?;
        tracing::info!(user = %user.user_name, "Logged in");
        Ok(user)
    }
}
