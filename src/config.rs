//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use directories::ProjectDirs;
use reqwest::Url;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default REST API base URL (local development backend).
pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7080/api/";

/// Largest accepted expiry leeway (one day).
pub const MAX_EXPIRY_LEEWAY_SECS: u64 = 86_400;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// REST API base URL, always ending in `/`
    pub api_base_url: Url,
    /// File holding the durable credential pair
    pub credentials_path: PathBuf,
    /// Upper bound on a single token refresh call
    pub refresh_timeout: Duration,
    /// Timeout applied to every other HTTP request
    pub request_timeout: Duration,
    /// Refresh this long before the access token actually expires
    pub expiry_leeway: Duration,
    /// Accept self-signed certificates (local development backend)
    pub accept_invalid_certs: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default URL is valid"),
            credentials_path: PathBuf::from("credentials.json"),
            refresh_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            expiry_leeway: Duration::ZERO,
            accept_invalid_certs: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = parse_base_url(
            &env::var("WORKOUT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        )?;

        let credentials_path = match env::var("WORKOUT_CREDENTIALS_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_credentials_path(),
        };

        Ok(Self {
            api_base_url,
            credentials_path,
            refresh_timeout: Duration::from_secs(env_secs("WORKOUT_REFRESH_TIMEOUT_SECS", 10)?),
            request_timeout: Duration::from_secs(env_secs("WORKOUT_REQUEST_TIMEOUT_SECS", 30)?),
            expiry_leeway: expiry_leeway(env_secs("WORKOUT_EXPIRY_LEEWAY_SECS", 0)?),
            accept_invalid_certs: env_bool("WORKOUT_ACCEPT_INVALID_CERTS")?,
        })
    }

    /// Config pointing at a specific API base URL (tests, CLI override).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = parse_base_url(base_url)?;
        Ok(self)
    }
}

/// Parse a base URL, forcing a trailing slash so relative joins keep the path.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    Url::parse(&normalized).map_err(|e| ConfigError::Invalid {
        name: "WORKOUT_API_BASE_URL",
        reason: e.to_string(),
    })
}

fn default_credentials_path() -> PathBuf {
    match ProjectDirs::from("dev", "workout-tracker", "workout-tracker") {
        Some(dirs) => dirs.data_dir().join("credentials.json"),
        None => {
            tracing::warn!("Could not determine platform data directory, using working directory");
            PathBuf::from("credentials.json")
        }
    }
}

fn expiry_leeway(secs: u64) -> Duration {
    if secs > MAX_EXPIRY_LEEWAY_SECS {
        tracing::warn!(
            requested = secs,
            max = MAX_EXPIRY_LEEWAY_SECS,
            "Expiry leeway too large, clamping"
        );
    }
    Duration::from_secs(secs.min(MAX_EXPIRY_LEEWAY_SECS))
}

fn env_secs(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("expected whole seconds, got {:?}", value),
        }),
        Err(_) => Ok(default),
    }
}

fn env_bool(name: &'static str) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            _ => Err(ConfigError::Invalid {
                name,
                reason: format!("expected true/false, got {:?}", value),
            }),
        },
        Err(_) => Ok(false),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
