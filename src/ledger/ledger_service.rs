use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use dashmap::{DashMap, DashSet};
use log::{debug, error, warn};

use super::ledger_model::{LedgerCell, LedgerSnapshot, MonthIndex, ReceiptRecord};
use super::ledger_traits::ReceiptRepositoryTrait;
use crate::constants::LEDGER_YEAR_SPAN;
use crate::errors::Result;
use crate::tenants::TenantRepositoryTrait;

type CellKey = (String, MonthIndex);

/// Rent ledger reconciler for one (landlord, year) pair.
///
/// Keeps an in-memory projection of the receipt table so lookups are
/// synchronous, and applies mutations optimistically: the projection changes
/// before the gateway write, and is rolled back if that write fails, so it
/// never disagrees with what was actually persisted.
///
/// Constructed explicitly by the composition root; there is no process-wide
/// instance. Concurrent `set_paid` calls for different cells are independent;
/// for the same cell the gateway's per-row upsert decides the last write.
pub struct LedgerService {
    user_id: String,
    year: i32,
    receipt_repo: Arc<dyn ReceiptRepositoryTrait>,
    tenant_repo: Arc<dyn TenantRepositoryTrait>,
    cells: DashMap<CellKey, LedgerCell>,
    known_tenants: DashSet<String>,
}

impl LedgerService {
    /// Any integer year is accepted here; [`year_options`] bounds the UI range.
    pub fn new(
        user_id: impl Into<String>,
        year: i32,
        receipt_repo: Arc<dyn ReceiptRepositoryTrait>,
        tenant_repo: Arc<dyn TenantRepositoryTrait>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            year,
            receipt_repo,
            tenant_repo,
            cells: DashMap::new(),
            known_tenants: DashSet::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Reloads the year's receipt rows and the landlord's tenant set.
    ///
    /// A gateway failure propagates; the caller shows the year as empty but
    /// must surface the error rather than silently render stale data.
    pub async fn load_year(&self) -> Result<LedgerSnapshot> {
        let records = self
            .receipt_repo
            .list_year(&self.user_id, self.year)
            .await?;
        let tenants = self.tenant_repo.list(&self.user_id).await?;

        self.known_tenants.clear();
        for tenant in &tenants {
            self.known_tenants.insert(tenant.id.clone());
        }

        self.cells.clear();
        for record in &records {
            self.cells.insert(
                (record.tenant_id.clone(), record.month),
                LedgerCell {
                    paid: true,
                    has_receipt: record.has_receipt,
                },
            );
        }

        debug!(
            "Loaded {} receipt cells for {} tenants, year {}",
            records.len(),
            tenants.len(),
            self.year
        );
        Ok(LedgerSnapshot { records })
    }

    /// True when the tenant is marked paid for the month. Projection only, no I/O.
    pub fn is_paid(&self, tenant_id: &str, month: MonthIndex) -> bool {
        self.cells
            .get(&(tenant_id.to_string(), month))
            .map_or(false, |cell| cell.paid)
    }

    /// True when a receipt is on file for the tenant and month
    pub fn has_receipt(&self, tenant_id: &str, month: MonthIndex) -> bool {
        self.cells
            .get(&(tenant_id.to_string(), month))
            .map_or(false, |cell| cell.has_receipt)
    }

    /// Marks (or unmarks) a tenant's month as paid.
    ///
    /// Unknown tenants are a no-op: the guard runs before any dispatch so a
    /// stale grid row can never write an orphan receipt. Marking twice is
    /// idempotent via the upsert conflict key, and unmarking an absent cell
    /// deletes nothing and succeeds.
    pub async fn set_paid(&self, tenant_id: &str, month: MonthIndex, paid: bool) -> Result<()> {
        if !self.known_tenants.contains(tenant_id) {
            debug!("Ignoring paid toggle for unknown tenant {}", tenant_id);
            return Ok(());
        }

        let key: CellKey = (tenant_id.to_string(), month);
        let previous = self.cells.get(&key).map(|cell| *cell.value());

        if paid {
            self.cells.insert(
                key.clone(),
                LedgerCell {
                    paid: true,
                    has_receipt: previous.map_or(false, |cell| cell.has_receipt),
                },
            );
        } else {
            self.cells.remove(&key);
        }

        let outcome = if paid {
            let record = ReceiptRecord {
                user_id: self.user_id.clone(),
                tenant_id: tenant_id.to_string(),
                year: self.year,
                month,
                has_receipt: previous.map_or(false, |cell| cell.has_receipt),
            };
            self.receipt_repo.upsert(&record).await
        } else {
            self.receipt_repo
                .delete(&self.user_id, tenant_id, self.year, month)
                .await
        };

        if let Err(e) = outcome {
            error!(
                "Receipt write failed for tenant {} month {}: {}",
                tenant_id,
                month.get(),
                e
            );
            match previous {
                Some(cell) => {
                    self.cells.insert(key, cell);
                }
                None => {
                    self.cells.remove(&key);
                }
            }
            return Err(e);
        }

        Ok(())
    }

    /// Flags whether a proof-of-payment receipt is on file for a month
    /// already marked paid. Unmarked cells are a no-op.
    pub async fn set_receipt(
        &self,
        tenant_id: &str,
        month: MonthIndex,
        has_receipt: bool,
    ) -> Result<()> {
        let key: CellKey = (tenant_id.to_string(), month);
        let Some(previous) = self.cells.get(&key).map(|cell| *cell.value()) else {
            debug!("Ignoring receipt toggle for unmarked cell");
            return Ok(());
        };

        self.cells.insert(
            key.clone(),
            LedgerCell {
                paid: previous.paid,
                has_receipt,
            },
        );

        let record = ReceiptRecord {
            user_id: self.user_id.clone(),
            tenant_id: tenant_id.to_string(),
            year: self.year,
            month,
            has_receipt,
        };
        if let Err(e) = self.receipt_repo.upsert(&record).await {
            error!("Receipt flag write failed for tenant {}: {}", tenant_id, e);
            self.cells.insert(key, previous);
            return Err(e);
        }

        Ok(())
    }

    /// One-time import of the legacy browser-local overlay for this
    /// (landlord, year). The payload is the stored JSON object keyed
    /// `"{tenantId}-{month}"` with 0-based months. Returns how many cells
    /// were written; the source is never deleted here.
    pub async fn migrate_legacy_records(&self, payload: &str) -> Result<usize> {
        let entries: HashMap<String, bool> = serde_json::from_str(payload)?;

        let mut records = Vec::new();
        for (key, paid) in entries {
            if !paid {
                continue;
            }
            let Some((tenant_id, month_raw)) = key.rsplit_once('-') else {
                warn!("Skipping malformed legacy record key '{}'", key);
                continue;
            };
            let Some(month) = month_raw.parse().ok().and_then(MonthIndex::new) else {
                warn!("Skipping legacy record '{}' with invalid month", key);
                continue;
            };
            records.push(ReceiptRecord {
                user_id: self.user_id.clone(),
                tenant_id: tenant_id.to_string(),
                year: self.year,
                month,
                has_receipt: false,
            });
        }

        self.receipt_repo.upsert_many(&records).await
    }
}

/// Year choices offered by the ledger UI, centered on the current year
pub fn year_options(today: NaiveDate) -> Vec<i32> {
    let current = today.year();
    (current - LEDGER_YEAR_SPAN..=current + LEDGER_YEAR_SPAN).collect()
}
