// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models mirroring the REST API's JSON.

pub mod exercise;
pub mod program;
pub mod session;
pub mod user;

pub use exercise::{Exercise, ExerciseCreate, ExerciseCreated, ExerciseUpdate};
pub use program::{
    ProgramDay, ProgramDayCreate, ProgramDayUpdate, ProgrammedExercise, ProgrammedExerciseCreate,
    ProgrammedExerciseUpdate, TrainingProgram, TrainingProgramCreate, TrainingProgramSummary,
    TrainingProgramUpdate,
};
pub use session::{
    group_sessions_by_day, ExerciseSession, ExerciseSessionCreate, ExerciseSet, ExerciseSetCreate,
    ExerciseSetUpdate,
};
pub use user::{
    Credentials, LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest, UserProfile,
    UserProfileToken,
};
