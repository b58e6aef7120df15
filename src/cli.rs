// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line interface.

use crate::error::ClientError;
use crate::models::{
    group_sessions_by_day, ExerciseCreate, ExerciseSessionCreate, ExerciseSetCreate,
    TrainingProgramCreate,
};
use crate::WorkoutClient;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Track training programs, exercises and logged sessions.
#[derive(Debug, Parser)]
#[command(name = "workout-tracker", version)]
pub struct Cli {
    /// REST API base URL (overrides WORKOUT_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Credential file (overrides WORKOUT_CREDENTIALS_PATH)
    #[arg(long, global = true)]
    pub credentials: Option<PathBuf>,

    /// Keep credentials in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and store credentials
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "WORKOUT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and store credentials
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long, env = "WORKOUT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget stored credentials
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Exercise catalogue
    #[command(subcommand)]
    Exercises(ExerciseCommand),
    /// Logged exercise sessions
    #[command(subcommand)]
    Sessions(SessionCommand),
    /// Training programs
    #[command(subcommand)]
    Programs(ProgramCommand),
}

#[derive(Debug, Subcommand)]
pub enum ExerciseCommand {
    List,
    Show {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    List {
        /// Group sessions by calendar day
        #[arg(long)]
        by_day: bool,
    },
    Show {
        id: i64,
    },
    /// List the sets of a session
    Sets {
        id: i64,
    },
    Create {
        #[arg(long)]
        exercise_id: i64,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Record a set in a session
    AddSet {
        session_id: i64,
        #[arg(long)]
        reps: u32,
        #[arg(long)]
        weight: f64,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProgramCommand {
    List,
    Show {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Tie program days to weekdays
        #[arg(long)]
        week_day_synced: bool,
    },
    Delete {
        id: i64,
    },
}

/// Execute one command against the API.
pub async fn run(client: &WorkoutClient, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password } => {
            let user = client.auth.login(&email, &password).await?;
            print_json(&user)
        }
        Commands::Register {
            email,
            username,
            password,
        } => {
            let user = client.auth.register(&email, &username, &password).await?;
            print_json(&user)
        }
        Commands::Logout => Ok(client.auth.logout().await?),
        Commands::Whoami => match client.auth.current_user().await {
            Some(user) => print_json(&user),
            None => Err(ClientError::NotAuthenticated.into()),
        },
        Commands::Exercises(cmd) => run_exercises(client, cmd).await,
        Commands::Sessions(cmd) => run_sessions(client, cmd).await,
        Commands::Programs(cmd) => run_programs(client, cmd).await,
    }
}

async fn run_exercises(client: &WorkoutClient, cmd: ExerciseCommand) -> anyhow::Result<()> {
    let service = &client.exercises;
    match cmd {
        ExerciseCommand::List => print_json(&service.list().await?),
        ExerciseCommand::Show { id } => print_json(&service.get(id).await?),
        ExerciseCommand::Create { name, description } => {
            print_json(&service.create(&ExerciseCreate { name, description }).await?)
        }
        ExerciseCommand::Update {
            id,
            name,
            description,
        } => Ok(service
            .update(id, &ExerciseCreate { name, description })
            .await?),
        ExerciseCommand::Delete { id } => Ok(service.delete(id).await?),
    }
}

async fn run_sessions(client: &WorkoutClient, cmd: SessionCommand) -> anyhow::Result<()> {
    let service = &client.sessions;
    match cmd {
        SessionCommand::List { by_day: false } => print_json(&service.list().await?),
        SessionCommand::List { by_day: true } => {
            print_json(&group_sessions_by_day(&service.list().await?))
        }
        SessionCommand::Show { id } => print_json(&service.get(id).await?),
        SessionCommand::Sets { id } => print_json(&service.sets(id).await?),
        SessionCommand::Create { exercise_id, notes } => print_json(
            &service
                .create(&ExerciseSessionCreate { exercise_id, notes })
                .await?,
        ),
        SessionCommand::AddSet {
            session_id,
            reps,
            weight,
        } => print_json(
            &service
                .create_set(&ExerciseSetCreate {
                    exercise_session_id: session_id,
                    repetitions: reps,
                    weight,
                })
                .await?,
        ),
        SessionCommand::Delete { id } => Ok(service.delete(id).await?),
    }
}

async fn run_programs(client: &WorkoutClient, cmd: ProgramCommand) -> anyhow::Result<()> {
    let service = &client.programs;
    match cmd {
        ProgramCommand::List => print_json(&service.list().await?),
        ProgramCommand::Show { id } => print_json(&service.get(id).await?),
        ProgramCommand::Create {
            name,
            description,
            week_day_synced,
        } => print_json(
            &service
                .create(&TrainingProgramCreate {
                    name,
                    description,
                    is_week_day_synced: week_day_synced,
                })
                .await?,
        ),
        ProgramCommand::Delete { id } => Ok(service.delete(id).await?),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
