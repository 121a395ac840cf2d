//! Demo error types.

use snowplow_dsl_core::error::DslError;
use thiserror::Error;

/// Startup and runtime errors for the demo binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// An event could not be assembled or tracked.
    #[error("tracking error: {0}")]
    Tracking(#[from] DslError),
}
