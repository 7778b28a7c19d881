//! Error types for sortvis-record.

use thiserror::Error;

/// Result type for recording operations.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors that reject a recording before any event is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The requested algorithm is not in the registry.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A counting sort input value lies outside `[0, max_value)`.
    #[error("value {value} at index {index} is outside [0, {max_value})")]
    InvalidBounds {
        index: usize,
        value: i64,
        max_value: i64,
    },

    /// Counting sort was requested without an upper value bound.
    #[error("counting sort requires an exclusive upper value bound")]
    MissingBound,
}
