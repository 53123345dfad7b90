//! Configuration management for the maximum subarray tool.
//!
//! Loads settings from an optional config file and `MSS`-prefixed
//! environment variables.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Sequence solved by the demo command
    #[serde(default)]
    pub demo: DemoConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Values to solve when no input is given
    #[serde(default = "default_demo_values")]
    pub values: Vec<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON log lines instead of plain text
    #[serde(default)]
    pub json: bool,
    /// Also write daily rolling log files into this directory
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_demo_values() -> Vec<Decimal> {
    [0, 1, 0, 2, -3, 3].into_iter().map(Decimal::from).collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from `config.*` in the working directory and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from("config", false)
    }

    /// Load configuration from the given file (extension optional) and the environment.
    pub fn load_from(path: &str, required: bool) -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(required))
            .add_source(config::Environment::default().separator("__").prefix("MSS"))
            .build()
            .with_context(|| format!("Failed to build configuration from {}", path))?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.demo.values.is_empty(),
            "demo.values must contain at least one value"
        );

        anyhow::ensure!(
            !self.logging.level.trim().is_empty(),
            "logging.level must not be empty"
        );

        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            values: default_demo_values(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            directory: None,
        }
    }
}
