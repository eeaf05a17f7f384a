//! Bounded, time-ordered log of distance/ETA calculations.
//!
//! Records are append-only. The repository assigns each one an id and an
//! ordering timestamp; queries return the most recent first.

mod error;
mod memory;
mod record;
mod snapshot;

pub use error::HistoryError;
pub use memory::InMemoryHistoryRepository;
pub use record::{RecordId, StoredRecord};
pub use snapshot::{HistorySnapshot, SNAPSHOT_VERSION};

use crate::geo::Calculation;
use async_trait::async_trait;

/// Persistence boundary for calculation history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Store `calculation`, stamping it with the repository's clock.
    async fn append(&self, calculation: Calculation) -> Result<RecordId, HistoryError>;

    /// Up to `limit` records, newest first.
    async fn query_recent(&self, limit: usize) -> Result<Vec<StoredRecord>, HistoryError>;
}
