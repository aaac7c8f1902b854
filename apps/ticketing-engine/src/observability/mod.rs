//! Logging setup for the ticketing engine.
//!
//! Builds a `tracing-subscriber` registry from [`LoggingConfig`]. The
//! purchase flow emits debug events on entry to each phase, an info event
//! on success and an error event on failure; this module only wires the
//! subscriber that renders them.
//!
//! # Example
//!
//! ```ignore
//! use ticketing_engine::config::LoggingConfig;
//! use ticketing_engine::observability::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Error type for logging setup.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    /// The configured level filter could not be parsed.
    #[error("invalid log filter '{filter}': {message}")]
    InvalidFilter {
        /// The rejected filter string.
        filter: String,
        /// Parse error details.
        message: String,
    },

    /// Failed to initialize the tracing subscriber.
    #[error("failed to initialize tracing subscriber: {0}")]
    InitError(String),
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when set.
///
/// # Errors
///
/// Returns a `TracingError` if the level filter cannot be parsed or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| TracingError::InvalidFilter {
            filter: config.level.clone(),
            message: e.to_string(),
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| TracingError::InitError(e.to_string()))
}
