//! Logged exercise sessions and their sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One logged session of a single exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSession {
    pub id: i64,
    pub exercise_id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    /// ISO 8601 timestamp assigned by the server
    pub created_at: String,
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A set (repetitions at a weight) inside a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    pub id: i64,
    #[serde(default)]
    pub exercise_id: i64,
    pub exercise_session_id: i64,
    pub repetitions: u32,
    pub weight: f64,
}

/// Body of `sessions/create` and `sessions/update/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSessionCreate {
    pub exercise_id: i64,
    pub notes: String,
}

/// Body of `sessions/sets/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSetCreate {
    pub exercise_session_id: i64,
    pub repetitions: u32,
    pub weight: f64,
}

/// Body of `sessions/sets/update/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseSetUpdate {
    pub repetitions: u32,
    pub weight: f64,
}

/// Group sessions by the calendar day (`YYYY-MM-DD`) of `created_at`.
///
/// Days come out in ascending order; sessions keep their input order within a day.
pub fn group_sessions_by_day(
    sessions: &[ExerciseSession],
) -> BTreeMap<String, Vec<ExerciseSession>> {
    let mut grouped: BTreeMap<String, Vec<ExerciseSession>> = BTreeMap::new();

    for session in sessions {
        let day = session
            .created_at
            .get(..10)
            .unwrap_or(&session.created_at)
            .to_string();
        grouped.entry(day).or_default().push(session.clone());
    }

    grouped
}
