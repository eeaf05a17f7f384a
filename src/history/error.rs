//! Calculation history errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    /// The backing store could not be reached or refused the operation.
    #[error("History store unavailable: {0}")]
    Unavailable(String),

    #[error("Snapshot serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Snapshot deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
