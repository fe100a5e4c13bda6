use async_trait::async_trait;

use super::ledger_model::{MonthIndex, ReceiptRecord};
use crate::errors::Result;

/// Trait defining the contract for receipt repository operations.
#[async_trait]
pub trait ReceiptRepositoryTrait: Send + Sync {
    async fn list_year(&self, user_id: &str, year: i32) -> Result<Vec<ReceiptRecord>>;

    /// Writes one cell. Must be idempotent per (user, tenant, year, month).
    async fn upsert(&self, record: &ReceiptRecord) -> Result<()>;

    /// Bulk variant used by the legacy-overlay migration; returns the row count written
    async fn upsert_many(&self, records: &[ReceiptRecord]) -> Result<usize>;

    /// Removes one cell. Deleting an absent cell is a no-op, not an error.
    async fn delete(
        &self,
        user_id: &str,
        tenant_id: &str,
        year: i32,
        month: MonthIndex,
    ) -> Result<()>;
}
