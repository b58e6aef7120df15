// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Error type returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
        /// Field-level validation messages returned by the server
        field_errors: Vec<String>,
    },

    #[error("Token refresh timed out after {0:?}")]
    RefreshTimeout(Duration),

    #[error("No refresh token available")]
    MissingRefreshToken,

    #[error("Session ended while waiting for token refresh")]
    SessionEnded,

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Build an API error from a non-success response body.
    ///
    /// The server reports validation problems in a few shapes:
    /// - `{"errors": [{"description": "..."}]}` (identity errors)
    /// - `{"errors": {"Field": ["..."]}}` (model validation)
    /// - a bare string body
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();

        let field_errors = match parsed.as_ref().and_then(|v| v.get("errors")) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.get("description").and_then(Value::as_str))
                .map(str::to_string)
                .collect(),
            Some(Value::Object(fields)) => fields
                .values()
                .filter_map(|messages| messages.get(0).and_then(Value::as_str))
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        let message = match parsed {
            Some(Value::String(s)) => s,
            Some(ref v) => v
                .get("title")
                .or_else(|| v.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| field_errors.first().cloned())
                .unwrap_or_else(|| default_message(status)),
            None if !body.trim().is_empty() => body.trim().to_string(),
            None => default_message(status),
        };

        ClientError::Api {
            status,
            message,
            field_errors,
        }
    }

    /// HTTP status of the failure, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// True when the server rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

fn default_message(status: StatusCode) -> String {
    if status == StatusCode::UNAUTHORIZED {
        "Unauthorized request.".to_string()
    } else {
        status
            .canonical_reason()
            .unwrap_or("Unknown API error")
            .to_string()
    }
}
