//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Failed to initialize logging: {0}")]
    Initialization(String),
}

/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init(config: &Config) -> Result<(), LoggingError> {
    let directives = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.effective_log_level().to_string());
    let filter = EnvFilter::try_new(&directives)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{directives}: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    }
    .map_err(|e| LoggingError::Initialization(e.to_string()))
}
