//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `WORKPACE_DB_PATH`: Database file path (required)
//! - `WORKPACE_DB_POOL_SIZE`: Connection pool size (required)
//! - `WORKPACE_LOG_LEVEL`: Log filter used when `RUST_LOG` is unset
//! - `WORKPACE_LOG_FORMAT`: `plain` or `json`
//!
//! The standards catalog can only be overridden from a file.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./workpace.json` or `./workpace.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use workpace_domain::{Config, DatabaseConfig, LogFormat, LoggingConfig, Result, WorkpaceError};

pub const ENV_DB_PATH: &str = "WORKPACE_DB_PATH";
pub const ENV_DB_POOL_SIZE: &str = "WORKPACE_DB_POOL_SIZE";
pub const ENV_LOG_LEVEL: &str = "WORKPACE_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "WORKPACE_LOG_FORMAT";

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `WorkpaceError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `WorkpaceError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var(ENV_DB_PATH)?;
    let db_pool_size = env_var(ENV_DB_POOL_SIZE).and_then(|s| {
        s.parse::<u32>().map_err(|e| WorkpaceError::Config(format!("Invalid pool size: {}", e)))
    })?;
    if db_pool_size == 0 {
        return Err(WorkpaceError::Config("Pool size must be at least 1".to_string()));
    }

    let mut logging = LoggingConfig::default();
    if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
        logging.level = level;
    }
    if let Ok(format) = std::env::var(ENV_LOG_FORMAT) {
        logging.format = format.parse::<LogFormat>().map_err(|_| {
            WorkpaceError::Config(format!("Invalid log format: {}", format))
        })?;
    }

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        logging,
        standards: None,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `WorkpaceError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configured standards table is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WorkpaceError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WorkpaceError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| WorkpaceError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    // Reject a bad standards table at load time rather than at first use.
    config.standards_catalog()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `WorkpaceError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WorkpaceError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WorkpaceError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(WorkpaceError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "workpace.json",
        "workpace.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `WorkpaceError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        WorkpaceError::Config(format!("Missing required environment variable: {}", key))
    })
}
