//! In-process history repository.

use super::{
    HistoryError, HistoryRepository, HistorySnapshot, RecordId, StoredRecord, SNAPSHOT_VERSION,
};
use crate::geo::Calculation;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use tokio::sync::RwLock;

/// [`HistoryRepository`] kept in memory.
///
/// Timestamps are strictly increasing within one repository, so records
/// appended in the same clock tick still have a total order. With a
/// retention cap, appending past the cap drops the oldest records.
#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    records: RwLock<VecDeque<StoredRecord>>,
    retain: Option<usize>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `max` records. A cap of zero means unbounded.
    pub fn with_retention(max: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::new()),
            retain: (max > 0).then_some(max),
        }
    }

    pub fn retention(&self) -> Option<usize> {
        self.retain
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn snapshot(&self) -> HistorySnapshot {
        let records = self.records.read().await;
        HistorySnapshot {
            version: SNAPSHOT_VERSION,
            taken_at: Utc::now(),
            retain: self.retain,
            records: records.iter().cloned().collect(),
        }
    }

    /// Rebuild a repository from a snapshot, re-applying its retention cap.
    pub fn restore(snapshot: HistorySnapshot) -> Result<Self, HistoryError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(HistoryError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let mut records: Vec<StoredRecord> = snapshot.records;
        records.sort_by_key(|r| r.recorded_at);
        let mut records: VecDeque<StoredRecord> = records.into();
        let retain = snapshot.retain.filter(|&max| max > 0);
        if let Some(max) = retain {
            while records.len() > max {
                records.pop_front();
            }
        }

        tracing::debug!(records = records.len(), "Restored calculation history");
        Ok(Self {
            records: RwLock::new(records),
            retain,
        })
    }

    fn next_timestamp(last: Option<DateTime<Utc>>) -> DateTime<Utc> {
        let now = Utc::now();
        match last {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        }
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, calculation: Calculation) -> Result<RecordId, HistoryError> {
        let mut records = self.records.write().await;

        let id = RecordId::new();
        let recorded_at = Self::next_timestamp(records.back().map(|r| r.recorded_at));
        records.push_back(StoredRecord {
            id,
            recorded_at,
            calculation,
        });

        if let Some(max) = self.retain {
            while records.len() > max {
                records.pop_front();
            }
        }

        tracing::debug!(record_id = %id, %recorded_at, "Appended calculation");
        Ok(id)
    }

    async fn query_recent(&self, limit: usize) -> Result<Vec<StoredRecord>, HistoryError> {
        let records = self.records.read().await;
        Ok(records.iter().rev().take(limit).cloned().collect())
    }
}
