//! Adflow CLI — error types.

use adflow_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the demonstration runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an unsupported value.
    #[error("configuration error: {0}")]
    Config(String),

    /// A lifecycle operation failed.
    #[error("workflow error: {0}")]
    Domain(#[from] DomainError),

    /// The final report could not be serialized.
    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),
}
