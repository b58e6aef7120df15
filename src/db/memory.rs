//! In-memory credential store (tests, `--ephemeral` runs).

use crate::db::{CredentialStore, StoredSession};
use crate::error::ClientError;
use std::sync::{Arc, Mutex};

/// Credential store that lives only as long as the process.
///
/// Clones share the same backing slot, so a test can keep one handle and
/// inspect what the session persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<Mutex<StoredSession>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: StoredSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Copy of what is currently stored.
    pub fn snapshot(&self) -> StoredSession {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoredSession> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<StoredSession, ClientError> {
        Ok(self.snapshot())
    }

    fn save(&self, session: &StoredSession) -> Result<(), ClientError> {
        *self.lock() = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.lock() = StoredSession::default();
        Ok(())
    }
}
