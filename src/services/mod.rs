// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session, token refresh and REST resources.

pub mod api;
pub mod auth;
pub mod exercises;
pub mod programs;
pub mod refresh;
pub mod session;
pub mod sessions;

pub use api::ApiClient;
pub use auth::AuthService;
pub use exercises::ExerciseService;
pub use programs::TrainingProgramService;
pub use refresh::{HttpTokenRefresher, TokenRefresher};
pub use session::Session;
pub use sessions::ExerciseSessionService;
