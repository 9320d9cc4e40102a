use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::transactions::models::TransactionRecord;
use crate::modules::transactions::repositories::TransactionStore;

/// In-memory transaction store.
///
/// Backs tests and embedders that do not bring their own persistence.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    rows: RwLock<Vec<TransactionRecord>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn create(&self, record: TransactionRecord) -> Result<TransactionRecord> {
        self.rows.write().await.push(record.clone());
        Ok(record)
    }

    async fn create_batch(
        &self,
        records: Vec<TransactionRecord>,
    ) -> Result<Vec<TransactionRecord>> {
        // A single write lock for the whole batch keeps it atomic
        self.rows.write().await.extend(records.iter().cloned());
        Ok(records)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TransactionRecord>> {
        Ok(self.rows.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<TransactionRecord>> {
        Ok(self.rows.read().await.clone())
    }
}
