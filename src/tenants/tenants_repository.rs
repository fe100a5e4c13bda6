use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use serde_json::json;

use super::tenants_model::{Tenant, TenantRow};
use super::tenants_traits::TenantRepositoryTrait;
use crate::errors::{Error, Result};
use crate::gateway::{Filter, GatewayClient};
use crate::ledger::ledger_repository::RECEIPTS_TABLE;

pub(crate) const TENANTS_TABLE: &str = "tenants";

/// Gateway-backed repository for tenant records
pub struct TenantRepository {
    client: Arc<GatewayClient>,
}

impl TenantRepository {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TenantRepositoryTrait for TenantRepository {
    async fn list(&self, landlord_id: &str) -> Result<Vec<Tenant>> {
        let filter = Filter::new().eq("landlord_id", landlord_id);
        let rows: Vec<TenantRow> = self.client.select(TENANTS_TABLE, &filter).await?;
        Ok(rows.into_iter().map(Tenant::from).collect())
    }

    async fn get(&self, landlord_id: &str, tenant_id: &str) -> Result<Tenant> {
        let filter = Filter::new()
            .eq("landlord_id", landlord_id)
            .eq("id", tenant_id);
        let rows: Vec<TenantRow> = self.client.select(TENANTS_TABLE, &filter).await?;

        rows.into_iter()
            .next()
            .map(Tenant::from)
            .ok_or_else(|| Error::NotFound(format!("Tenant with id {} not found", tenant_id)))
    }

    async fn update_rent(
        &self,
        landlord_id: &str,
        tenant_id: &str,
        rent: Decimal,
    ) -> Result<Tenant> {
        let filter = Filter::new()
            .eq("landlord_id", landlord_id)
            .eq("id", tenant_id);
        let rows: Vec<TenantRow> = self
            .client
            .update(TENANTS_TABLE, &filter, &json!({ "rent_amount": rent }))
            .await?;

        rows.into_iter()
            .next()
            .map(Tenant::from)
            .ok_or_else(|| Error::NotFound(format!("Tenant with id {} not found", tenant_id)))
    }

    /// Deletes a tenant together with its payment-tracking rows.
    ///
    /// Receipt rows are keyed by tenant id and are meaningless once the
    /// tenant is gone; they must be removed here, not left for a later scan.
    async fn delete(&self, landlord_id: &str, tenant_id: &str) -> Result<()> {
        debug!("Deleting tenant {} and its receipt rows", tenant_id);

        let receipts = Filter::new()
            .eq("user_id", landlord_id)
            .eq("tenant_id", tenant_id);
        self.client.delete(RECEIPTS_TABLE, &receipts).await?;

        let tenant = Filter::new()
            .eq("landlord_id", landlord_id)
            .eq("id", tenant_id);
        self.client.delete(TENANTS_TABLE, &tenant).await?;
        Ok(())
    }
}
