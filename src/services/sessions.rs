//! Exercise session and set endpoints.

use crate::error::ClientError;
use crate::models::{
    ExerciseSession, ExerciseSessionCreate, ExerciseSet, ExerciseSetCreate, ExerciseSetUpdate,
};
use crate::services::api::ApiClient;

/// Logged sessions (`sessions/...`) and the sets recorded in them.
#[derive(Debug, Clone)]
pub struct ExerciseSessionService {
    api: ApiClient,
}

impl ExerciseSessionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<ExerciseSession>, ClientError> {
        self.api.get("sessions/").await
    }

    pub async fn get(&self, session_id: i64) -> Result<ExerciseSession, ClientError> {
        self.api.get(&format!("sessions/{}", session_id)).await
    }

    pub async fn create(
        &self,
        session: &ExerciseSessionCreate,
    ) -> Result<ExerciseSession, ClientError> {
        self.api.post("sessions/create", session).await
    }

    pub async fn update(
        &self,
        session_id: i64,
        session: &ExerciseSessionCreate,
    ) -> Result<(), ClientError> {
        self.api
            .put(&format!("sessions/update/{}", session_id), session)
            .await
    }

    pub async fn delete(&self, session_id: i64) -> Result<(), ClientError> {
        self.api.delete(&format!("sessions/delete/{}", session_id)).await
    }

    // ─── Sets ────────────────────────────────────────────────────────────────

    pub async fn sets(&self, session_id: i64) -> Result<Vec<ExerciseSet>, ClientError> {
        self.api.get(&format!("sessions/{}/sets", session_id)).await
    }

    pub async fn get_set(&self, set_id: i64) -> Result<ExerciseSet, ClientError> {
        self.api.get(&format!("sessions/sets/{}", set_id)).await
    }

    pub async fn create_set(&self, set: &ExerciseSetCreate) -> Result<ExerciseSet, ClientError> {
        self.api.post("sessions/sets/create", set).await
    }

    pub async fn update_set(
        &self,
        set_id: i64,
        set: &ExerciseSetUpdate,
    ) -> Result<(), ClientError> {
        self.api
            .put(&format!("sessions/sets/update/{}", set_id), set)
            .await
    }

    pub async fn delete_set(&self, set_id: i64) -> Result<(), ClientError> {
        self.api
            .delete(&format!("sessions/sets/delete/{}", set_id))
            .await
    }
}
