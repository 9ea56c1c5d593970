//! Structured logging bootstrap
//!
//! `RUST_LOG` wins when set; otherwise the configured level is used as the
//! filter directive.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use workpace_domain::{LogFormat, LoggingConfig, Result, WorkpaceError};

/// Build the event filter for `config`.
///
/// # Errors
/// Returns `WorkpaceError::Config` if the configured level is not a valid
/// filter directive and `RUST_LOG` is unset.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.level).map_err(|e| {
            WorkpaceError::Config(format!("Invalid log level '{}': {}", config.level, e))
        })
    })
}

/// Install the global subscriber.
///
/// # Errors
/// Returns `WorkpaceError::Config` for an invalid level and
/// `WorkpaceError::Internal` if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Plain => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    installed.map_err(|e| WorkpaceError::Internal(format!("Failed to initialise logging: {}", e)))
}
