// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Tracker command-line client
//!
//! Logs in against the workout REST API, keeps the credentials on disk, and
//! exposes exercises, sessions and training programs as subcommands.

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    cli::{self, Cli},
    config::Config,
    db::{CredentialStore, FileCredentialStore, MemoryCredentialStore},
    middleware::LoginRedirect,
    WorkoutClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let mut config = Config::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url)?;
    }
    if let Some(path) = &cli.credentials {
        config.credentials_path = path.clone();
    }
    tracing::debug!(api = %config.api_base_url, "Configuration loaded");

    let store: Arc<dyn CredentialStore> = if cli.ephemeral {
        Arc::new(MemoryCredentialStore::new())
    } else {
        Arc::new(FileCredentialStore::new(&config.credentials_path))
    };

    let client = WorkoutClient::from_config(&config, store, Arc::new(LoginRedirect))?;

    cli::run(&client, cli.command).await
}

/// Initialize logging: compact human output, or JSON with `--log-json`.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("workout_tracker=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
