//! Durable credential storage.
//!
//! The session is persisted as three entries (access token, refresh token,
//! user profile) so it survives process restarts.

pub mod file;
pub mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

use crate::error::ClientError;
use crate::models::{Credentials, UserProfile};
use serde::{Deserialize, Serialize};

/// Everything the store keeps between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(
        default,
        rename = "refreshToken",
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl StoredSession {
    /// Credential pair, if an access token is stored.
    ///
    /// A stored access token without a refresh token is kept as-is (empty
    /// refresh token) so the gateway can still detect and end that session.
    pub fn credentials(&self) -> Option<Credentials> {
        self.token.as_ref().map(|access| Credentials {
            access_token: access.clone(),
            refresh_token: self.refresh_token.clone().unwrap_or_default(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.refresh_token.is_none() && self.user.is_none()
    }
}

/// Durable key/value storage for the session.
pub trait CredentialStore: Send + Sync {
    /// Read the stored session; a missing store reads as empty.
    fn load(&self) -> Result<StoredSession, ClientError>;

    /// Replace the stored session.
    fn save(&self, session: &StoredSession) -> Result<(), ClientError>;

    /// Remove everything.
    fn clear(&self) -> Result<(), ClientError>;
}
