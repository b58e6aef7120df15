//! Exercise catalogue endpoints.

use crate::error::ClientError;
use crate::models::{Exercise, ExerciseCreate, ExerciseCreated, ExerciseUpdate};
use crate::services::api::ApiClient;

#[derive(Debug, Clone)]
pub struct ExerciseService {
    api: ApiClient,
}

impl ExerciseService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Exercise>, ClientError> {
        self.api.get("exercises/").await
    }

    pub async fn get(&self, id: i64) -> Result<Exercise, ClientError> {
        self.api.get(&format!("exercises/{}", id)).await
    }

    pub async fn create(&self, exercise: &ExerciseCreate) -> Result<ExerciseCreated, ClientError> {
        self.api.post("exercises/create", exercise).await
    }

    pub async fn update(&self, id: i64, exercise: &ExerciseUpdate) -> Result<(), ClientError> {
        self.api.put(&format!("exercises/update/{}", id), exercise).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.api.delete(&format!("exercises/delete/{}", id)).await
    }
}
