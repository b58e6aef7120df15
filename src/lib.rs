// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout-Tracker: client for the workout tracking REST API
//!
//! This crate talks to the training program / exercise / session API on
//! behalf of a logged-in user. Every call goes through an authenticated
//! gateway that attaches the bearer token and refreshes it when it expires.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use db::CredentialStore;
use error::ClientError;
use middleware::LogoutHook;
use services::{
    ApiClient, AuthService, ExerciseService, ExerciseSessionService, TrainingProgramService,
};
use std::sync::Arc;

/// All resource services sharing one session and gateway.
#[derive(Debug, Clone)]
pub struct WorkoutClient {
    pub api: ApiClient,
    pub auth: AuthService,
    pub exercises: ExerciseService,
    pub sessions: ExerciseSessionService,
    pub programs: TrainingProgramService,
}

impl WorkoutClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            auth: AuthService::new(api.clone()),
            exercises: ExerciseService::new(api.clone()),
            sessions: ExerciseSessionService::new(api.clone()),
            programs: TrainingProgramService::new(api.clone()),
            api,
        }
    }

    pub fn from_config(
        config: &Config,
        store: Arc<dyn CredentialStore>,
        logout_hook: Arc<dyn LogoutHook>,
    ) -> Result<Self, ClientError> {
        Ok(Self::new(ApiClient::from_config(config, store, logout_hook)?))
    }
}
