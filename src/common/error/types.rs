//! Unified error types for coursedeck.
//!
//! The grouping engine itself is total and never fails; errors only arise at
//! the JSON input boundary and when rendering output.
use thiserror::Error;

/// Main error type for coursedeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON
    #[error("JSON error: {0}")]
    Json(String),

    /// The payload is JSON but carries no slide record array
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// YAML front matter could not be produced
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Formatting into an output buffer failed
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for coursedeck operations.
pub type Result<T> = std::result::Result<T, Error>;
