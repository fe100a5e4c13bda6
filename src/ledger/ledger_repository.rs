use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use super::ledger_model::{MonthIndex, ReceiptRecord, ReceiptRow};
use super::ledger_traits::ReceiptRepositoryTrait;
use crate::errors::Result;
use crate::gateway::{Filter, GatewayClient};

pub(crate) const RECEIPTS_TABLE: &str = "payment_receipts";

/// Unique tuple the receipt upsert resolves conflicts on
const CONFLICT_KEYS: [&str; 4] = ["user_id", "tenant_id", "year", "month"];

/// Gateway-backed repository for payment-receipt cells
pub struct ReceiptRepository {
    client: Arc<GatewayClient>,
}

impl ReceiptRepository {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReceiptRepositoryTrait for ReceiptRepository {
    async fn list_year(&self, user_id: &str, year: i32) -> Result<Vec<ReceiptRecord>> {
        let filter = Filter::new().eq("user_id", user_id).eq("year", year);
        let rows: Vec<ReceiptRow> = self.client.select(RECEIPTS_TABLE, &filter).await?;

        // A malformed month can only come from writers bypassing this crate;
        // drop the row rather than poison the whole year.
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let month = row.month;
                ReceiptRecord::from_row(row).or_else(|| {
                    warn!("Skipping receipt row with invalid month {}", month);
                    None
                })
            })
            .collect())
    }

    async fn upsert(&self, record: &ReceiptRecord) -> Result<()> {
        let rows = [record.to_row()];
        let _: Vec<ReceiptRow> = self
            .client
            .upsert(RECEIPTS_TABLE, &rows, &CONFLICT_KEYS)
            .await?;
        Ok(())
    }

    async fn upsert_many(&self, records: &[ReceiptRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let rows: Vec<ReceiptRow> = records.iter().map(ReceiptRecord::to_row).collect();
        let stored: Vec<ReceiptRow> = self
            .client
            .upsert(RECEIPTS_TABLE, &rows, &CONFLICT_KEYS)
            .await?;
        Ok(stored.len())
    }

    async fn delete(
        &self,
        user_id: &str,
        tenant_id: &str,
        year: i32,
        month: MonthIndex,
    ) -> Result<()> {
        let filter = Filter::new()
            .eq("user_id", user_id)
            .eq("tenant_id", tenant_id)
            .eq("year", year)
            .eq("month", month.month_number());
        self.client.delete(RECEIPTS_TABLE, &filter).await?;
        Ok(())
    }
}
