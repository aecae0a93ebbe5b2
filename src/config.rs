//! Configuration module
//!
//! Two layers, following the split between runtime settings and on-disk
//! configuration: [`Config`] is what the services consume; [`AppConfig`] is
//! the TOML file shape (`~/.config/arena-booking/config.toml`, overridable
//! via the `ARENA_CONFIG` environment variable).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::time_range::Minutes;
use crate::shared::retry::RetryConfig;

/// Runtime settings for the availability and booking services.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of one bookable slot in minutes
    pub slot_duration_minutes: Minutes,
    /// Backoff policy for transient fetch failures
    pub fetch_retry: RetryConfig,
}

impl Config {
    pub fn new(slot_duration_minutes: Minutes) -> Self {
        Self {
            slot_duration_minutes,
            fetch_retry: RetryConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(60)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub booking: BookingSection,
    pub fetch: FetchSection,
    pub logging: LoggingSection,
    pub api: ApiSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingSection {
    pub slot_duration_minutes: u32,
}

impl Default for BookingSection {
    fn default() -> Self {
        Self {
            slot_duration_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSection {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub backoff_multiplier: f64,
    pub max_delay_ms: u64,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 200,
            backoff_multiplier: 2.0,
            max_delay_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Marketplace backend endpoint. When unset, the demo binary runs against
/// the in-memory store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Collapse the file shape into the runtime [`Config`].
    pub fn core(&self) -> Config {
        Config {
            slot_duration_minutes: self.booking.slot_duration_minutes,
            fetch_retry: RetryConfig {
                max_attempts: self.fetch.max_attempts,
                initial_delay: Duration::from_millis(self.fetch.initial_delay_ms),
                backoff_multiplier: self.fetch.backoff_multiplier,
                max_delay: Duration::from_millis(self.fetch.max_delay_ms),
            },
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arena-booking")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────
