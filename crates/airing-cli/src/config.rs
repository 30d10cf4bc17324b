//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use airing_core::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_HUMIDITY_THRESHOLD_PCT, DEFAULT_MIN_RELATIVE_DIFF,
    DEFAULT_PORT, DEFAULT_READ_TIMEOUT, EvalConfig, LinkOptions, PollStrategy,
};
use airing_types::{Language, SensorEndpoint};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display language ("en" or "lu")
    pub language: Language,

    /// TCP port shared by all sensors
    pub port: u16,

    /// Relative humidity (percent) at or above which a room should be aired
    pub humidity_threshold_pct: f64,

    /// Minimum difference as a fraction of the room value (0.1 = 10 %)
    pub min_relative_diff: f64,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Read timeout in seconds
    pub read_timeout_secs: u64,

    /// Query rooms one after the other or all at once
    pub poll_strategy: PollStrategy,

    /// The outside sensor
    pub outside: SensorEndpoint,

    /// Room sensors, in display order
    pub rooms: Vec<SensorEndpoint>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            port: DEFAULT_PORT,
            humidity_threshold_pct: DEFAULT_HUMIDITY_THRESHOLD_PCT,
            min_relative_diff: DEFAULT_MIN_RELATIVE_DIFF,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT.as_secs(),
            read_timeout_secs: DEFAULT_READ_TIMEOUT.as_secs(),
            poll_strategy: PollStrategy::default(),
            outside: SensorEndpoint::new("outside", "127.0.0.1"),
            rooms: Vec::new(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("airing")
            .join("config.toml")
    }

    /// Resolve the config path: explicit path (flag or env) or the default
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::default_path, Path::to_path_buf)
    }

    /// Load config from file, or return default if not found
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "No config file at {}, using defaults (no rooms configured)",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Check the values before polling
    pub fn validate(&self) -> Result<()> {
        self.eval_config().validate()?;
        if self.connect_timeout_secs == 0 || self.read_timeout_secs == 0 {
            bail!("Timeouts must be at least one second");
        }
        Ok(())
    }

    /// Evaluation settings for the core
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            port: self.port,
            humidity_threshold_pct: self.humidity_threshold_pct,
            min_relative_diff: self.min_relative_diff,
            language: self.language,
        }
    }

    /// Timeouts for the sensor link
    pub fn link_options(&self) -> LinkOptions {
        LinkOptions::default()
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .read_timeout(Duration::from_secs(self.read_timeout_secs))
    }
}
