//! Configuration structures
//!
//! Plain serde structs; loading (env vars, file probing) lives in
//! `workpace-infra`.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::impl_domain_status_conversions;
use crate::types::catalog::{StandardDefinition, StandardsCatalog, TargetUnit};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Replaces the built-in standards catalog when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standards: Option<Vec<StandardEntryConfig>>,
}

impl Config {
    /// Catalog the engine should be constructed with.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Config` if the configured standards are invalid.
    pub fn standards_catalog(&self) -> Result<StandardsCatalog> {
        match &self.standards {
            None => Ok(StandardsCatalog::default()),
            Some(entries) => StandardsCatalog::from_definitions(entries.iter().map(|entry| {
                (entry.task_type.clone(), StandardDefinition::new(entry.target, entry.unit))
            })),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "workpace.db".to_string(), pool_size: default_pool_size() }
    }
}

fn default_pool_size() -> u32 {
    4
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: LogFormat::default() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl_domain_status_conversions!(LogFormat {
    Plain => "plain",
    Json => "json",
});

/// One row of a configured standards table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardEntryConfig {
    pub task_type: String,
    pub target: f64,
    pub unit: TargetUnit,
}
