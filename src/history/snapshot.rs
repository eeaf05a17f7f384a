//! Versioned export of an in-memory history.

use super::{HistoryError, StoredRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a history, oldest record first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub version: u32,
    pub taken_at: DateTime<Utc>,
    /// Retention cap of the repository the snapshot came from.
    pub retain: Option<usize>,
    pub records: Vec<StoredRecord>,
}

impl HistorySnapshot {
    pub fn to_json(&self) -> Result<String, HistoryError> {
        serde_json::to_string(self).map_err(|e| HistoryError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| HistoryError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, HistoryError> {
        bincode::serialize(self).map_err(|e| HistoryError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HistoryError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| HistoryError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, HistoryError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(HistoryError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
