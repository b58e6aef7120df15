//! Exercise catalogue models.

use serde::{Deserialize, Serialize};

/// Exercise as returned by `exercises/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// False for the built-in catalogue
    #[serde(default)]
    pub is_usermade: bool,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Body of `exercises/create`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseCreate {
    pub name: String,
    pub description: String,
}

/// Body of `exercises/update/{id}`.
pub type ExerciseUpdate = ExerciseCreate;

/// Response of `exercises/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCreated {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_usermade: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    pub created_at: String,
}
