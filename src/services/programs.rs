// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training program endpoints: programs, program days, programmed exercises.

use crate::error::ClientError;
use crate::models::program::ProgramPayload;
use crate::models::{
    ProgramDay, ProgramDayCreate, ProgramDayUpdate, ProgrammedExercise, ProgrammedExerciseCreate,
    ProgrammedExerciseUpdate, TrainingProgram, TrainingProgramCreate, TrainingProgramSummary,
    TrainingProgramUpdate,
};
use crate::services::api::ApiClient;
use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub struct TrainingProgramService {
    api: ApiClient,
}

impl TrainingProgramService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // ─── Programs ────────────────────────────────────────────────────────────

    pub async fn list(&self) -> Result<Vec<TrainingProgramSummary>, ClientError> {
        self.api.get("program/").await
    }

    /// Fetch one program with its days.
    ///
    /// The server answers either with the object or a one-element array.
    pub async fn get(&self, program_id: i64) -> Result<TrainingProgram, ClientError> {
        let payload: ProgramPayload = self.api.get(&format!("program/{}", program_id)).await?;
        payload.into_first().ok_or_else(|| ClientError::Api {
            status: StatusCode::NOT_FOUND,
            message: format!("Training program {} not found", program_id),
            field_errors: Vec::new(),
        })
    }

    pub async fn create(
        &self,
        program: &TrainingProgramCreate,
    ) -> Result<TrainingProgram, ClientError> {
        self.api.post("program/create", program).await
    }

    pub async fn update(
        &self,
        program_id: i64,
        program: &TrainingProgramUpdate,
    ) -> Result<(), ClientError> {
        self.api
            .put(&format!("program/update/{}", program_id), program)
            .await
    }

    pub async fn delete(&self, program_id: i64) -> Result<(), ClientError> {
        self.api.delete(&format!("program/delete/{}", program_id)).await
    }

    // ─── Days ────────────────────────────────────────────────────────────────

    pub async fn create_day(&self, day: &ProgramDayCreate) -> Result<ProgramDay, ClientError> {
        self.api.post("program/days/create", day).await
    }

    pub async fn update_day(&self, day_id: i64, day: &ProgramDayUpdate) -> Result<(), ClientError> {
        self.api
            .put(&format!("program/days/update/{}", day_id), day)
            .await
    }

    pub async fn delete_day(&self, day_id: i64) -> Result<(), ClientError> {
        self.api
            .delete(&format!("program/days/delete/{}", day_id))
            .await
    }

    // ─── Programmed exercises ────────────────────────────────────────────────

    pub async fn create_exercise(
        &self,
        exercise: &ProgrammedExerciseCreate,
    ) -> Result<ProgrammedExercise, ClientError> {
        self.api
            .post("program/days/exercises/create", exercise)
            .await
    }

    pub async fn update_exercise(
        &self,
        programmed_exercise_id: i64,
        exercise: &ProgrammedExerciseUpdate,
    ) -> Result<(), ClientError> {
        self.api
            .put(
                &format!("program/days/exercises/update/{}", programmed_exercise_id),
                exercise,
            )
            .await
    }

    pub async fn delete_exercise(&self, programmed_exercise_id: i64) -> Result<(), ClientError> {
        self.api
            .delete(&format!(
                "program/days/exercises/delete/{}",
                programmed_exercise_id
            ))
            .await
    }
}
