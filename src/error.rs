// src/error.rs
use mathtext_traits::MetricsError;
use thiserror::Error;

/// Errors raised by the outer surfaces: option loading, metrics setup and
/// the CLI. Rendering itself is total and never produces one of these.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid render options: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Typesetting failed: {0}")]
    Typeset(String),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),
}
