//! Training programs, their days and the exercises programmed on each day.

use serde::{Deserialize, Serialize};

/// Entry of the program listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingProgramSummary {
    pub id: i64,
    pub name: String,
}

/// Full training program with its days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Days follow the calendar week instead of a free rotation
    #[serde(default)]
    pub is_week_day_synced: bool,
    pub created_at: String,
    #[serde(default)]
    pub days: Vec<ProgramDay>,
}

/// Body of `program/create` and `program/update/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgramCreate {
    pub name: String,
    pub description: String,
    pub is_week_day_synced: bool,
}

pub type TrainingProgramUpdate = TrainingProgramCreate;

/// One day of a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDay {
    pub id: i64,
    pub training_program_id: i64,
    pub position: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ProgrammedExercise>,
}

/// Body of `program/days/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDayCreate {
    pub training_program_id: i64,
    pub name: String,
    pub position: i32,
    pub description: String,
    pub notes: String,
}

/// Body of `program/days/update/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramDayUpdate {
    pub name: String,
    pub position: i32,
    pub description: String,
    pub notes: String,
}

/// Exercise scheduled on a program day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammedExercise {
    pub id: i64,
    pub program_day_id: i64,
    pub exercise_id: i64,
    pub position: i32,
    pub sets: u32,
    pub reps: u32,
    /// Rest between sets, in seconds
    pub rest_time: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `program/days/exercises/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammedExerciseCreate {
    pub program_day_id: i64,
    pub exercise_id: i64,
    pub position: i32,
    pub sets: u32,
    pub reps: u32,
    pub rest_time: u32,
    pub notes: String,
}

/// Body of `program/days/exercises/update/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammedExerciseUpdate {
    pub position: i32,
    pub sets: u32,
    pub reps: u32,
    pub rest_time: u32,
    pub notes: String,
}

/// `program/{id}` answers with either the object or a one-element array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProgramPayload {
    One(TrainingProgram),
    Many(Vec<TrainingProgram>),
}

impl ProgramPayload {
    pub fn into_first(self) -> Option<TrainingProgram> {
        match self {
            ProgramPayload::One(program) => Some(program),
            ProgramPayload::Many(programs) => programs.into_iter().next(),
        }
    }
}
