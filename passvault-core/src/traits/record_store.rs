//! Record persistence abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::Record;

/// Record Store Trait
///
/// The store holds the full record set as a single unit. There is no
/// row-level write: every mutation loads the whole snapshot and replaces it.
///
/// Platform implementation:
/// - Web server: `JsonFileRecordStore` (pretty-printed JSON file, atomic rename)
/// - Tests / embedding: `InMemoryRecordStore`
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load the current snapshot, in insertion order
    ///
    /// Never fails: an absent, empty or unreadable store yields an empty snapshot.
    async fn load(&self) -> Vec<Record>;

    /// Replace the whole snapshot
    ///
    /// # Arguments
    /// * `records` - the new and only content of the store
    async fn replace(&self, records: &[Record]) -> CoreResult<()>;
}

/// In-memory record store
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl InMemoryRecordStore {
    /// Create an empty memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store pre-populated with a snapshot
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn load(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    async fn replace(&self, records: &[Record]) -> CoreResult<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
