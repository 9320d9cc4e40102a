use async_trait::async_trait;

use crate::core::Result;
use crate::modules::transactions::models::TransactionRecord;

/// Persistence boundary for ledger rows.
///
/// `create` has create-one semantics with no dedup key: every call inserts
/// a new row. Implementations handle their own locking per created record.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Insert a single row
    async fn create(&self, record: TransactionRecord) -> Result<TransactionRecord>;

    /// Insert every row or none of them
    async fn create_batch(
        &self,
        records: Vec<TransactionRecord>,
    ) -> Result<Vec<TransactionRecord>>;

    /// Find a row by id
    async fn find_by_id(&self, id: &str) -> Result<Option<TransactionRecord>>;

    /// List all rows in insertion order
    async fn list(&self) -> Result<Vec<TransactionRecord>>;
}
