use async_trait::async_trait;
use rust_decimal::Decimal;

use super::tenants_model::Tenant;
use crate::errors::Result;

/// Trait defining the contract for tenant repository operations.
#[async_trait]
pub trait TenantRepositoryTrait: Send + Sync {
    async fn list(&self, landlord_id: &str) -> Result<Vec<Tenant>>;
    async fn get(&self, landlord_id: &str, tenant_id: &str) -> Result<Tenant>;
    async fn update_rent(&self, landlord_id: &str, tenant_id: &str, rent: Decimal)
        -> Result<Tenant>;
    async fn delete(&self, landlord_id: &str, tenant_id: &str) -> Result<()>;
}
