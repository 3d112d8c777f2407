//! Configuration management for the Season Premiere Alert CLI.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files and turns them into a single [`Settings`] value
//! that is handed to every component at construction time.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf, time::Duration};

use crate::management::AlertLogManager;

pub const DEFAULT_DAYS_AHEAD: u32 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WEBHOOK_USERNAME: &str = "Coming Soon";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up under `seasoncli/.env` in the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/seasoncli/.env`
/// - macOS: `~/Library/Application Support/seasoncli/.env`
/// - Windows: `%LOCALAPPDATA%/seasoncli/.env`
///
/// A missing file is not an error, since every value can also come from the
/// process environment. Variables already present in the environment are
/// never overwritten by the file.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

/// Returns the application directory inside the local data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("seasoncli");
    path
}

/// Payload shape expected by the webhook endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookFormat {
    Discord,
    Slack,
}

impl std::str::FromStr for WebhookFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discord" => Ok(WebhookFormat::Discord),
            "slack" => Ok(WebhookFormat::Slack),
            other => Err(format!(
                "Unknown webhook format '{}', expected 'discord' or 'slack'",
                other
            )),
        }
    }
}

/// Runtime configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the Sonarr instance, without trailing slash.
    pub sonarr_url: String,
    /// API key sent as `X-Api-Key`.
    pub sonarr_api_key: String,
    /// Only needed when alerts are actually sent.
    pub webhook_url: Option<String>,
    /// Display name attached to every webhook message.
    pub webhook_username: String,
    pub webhook_format: WebhookFormat,
    /// Size of the lookahead window in days.
    pub days_ahead: u32,
    /// Applied to every outbound HTTP request.
    pub request_timeout: Duration,
    pub alert_log_file: PathBuf,
}

impl Settings {
    /// Builds settings from the process environment.
    ///
    /// Call [`load_env`] first so values from the `.env` file are visible.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending variable when a required value
    /// is missing or a numeric value cannot be parsed. `WEBHOOK_URL` is not
    /// required here; delivery checks for it.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| get(key).ok_or_else(|| format!("{} must be set", key));

        let sonarr_url = required("SONARR_URL")?.trim().trim_end_matches('/').to_string();
        let sonarr_api_key = required("SONARR_API_KEY")?;
        let webhook_url = get("WEBHOOK_URL").map(|url| url.trim().to_string());

        let webhook_username =
            get("WEBHOOK_USERNAME").unwrap_or_else(|| DEFAULT_WEBHOOK_USERNAME.to_string());

        let webhook_format = match get("WEBHOOK_FORMAT") {
            Some(v) => v.parse::<WebhookFormat>()?,
            None => WebhookFormat::Discord,
        };

        let days_ahead = match get("DAYS_AHEAD") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("DAYS_AHEAD must be a non-negative integer: {}", e))?,
            None => DEFAULT_DAYS_AHEAD,
        };

        let timeout_secs = match get("REQUEST_TIMEOUT") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("REQUEST_TIMEOUT must be a number of seconds: {}", e))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let alert_log_file = alert_log_file_from_lookup(&lookup);

        Ok(Self {
            sonarr_url,
            sonarr_api_key,
            webhook_url,
            webhook_username,
            webhook_format,
            days_ahead,
            request_timeout: Duration::from_secs(timeout_secs),
            alert_log_file,
        })
    }

    /// Returns the webhook URL or the error to report when delivery needs it.
    pub fn require_webhook_url(&self) -> Result<&str, String> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| "WEBHOOK_URL must be set to send alerts".to_string())
    }

    /// Returns a copy with the lookahead window replaced, if one is given.
    pub fn with_days_ahead(mut self, days_ahead: Option<u32>) -> Self {
        if let Some(days) = days_ahead {
            self.days_ahead = days;
        }
        self
    }
}

/// Location of the alert log: `ALERT_LOG_FILE` or the data dir default.
pub fn alert_log_file() -> PathBuf {
    alert_log_file_from_lookup(&|key: &str| env::var(key).ok())
}

fn alert_log_file_from_lookup<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup("ALERT_LOG_FILE")
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(AlertLogManager::default_path)
}
