//! Error types for sortvis-playback.

use axum::http::StatusCode;
use sortvis_record::RecordError;
use thiserror::Error;

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, replaying or serving arrays.
#[derive(Debug, Error)]
pub enum Error {
    /// Recording was rejected (unknown algorithm, bad bounds)
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// A playback loop is already active on this player
    #[error("player is already running")]
    AlreadyRunning,

    /// An event referenced a position outside the display array
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Array generation parameters are inconsistent
    #[error("Invalid array spec: {0}")]
    InvalidArraySpec(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status used when this error reaches the control surface.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Record(_) | Error::InvalidArraySpec(_) => StatusCode::BAD_REQUEST,
            Error::AlreadyRunning => StatusCode::CONFLICT,
            Error::IndexOutOfRange { .. }
            | Error::Config(_)
            | Error::Serialization(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
