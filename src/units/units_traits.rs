use async_trait::async_trait;
use rust_decimal::Decimal;

use super::units_model::Unit;
use crate::errors::Result;

/// Trait defining the contract for unit repository operations.
#[async_trait]
pub trait UnitRepositoryTrait: Send + Sync {
    async fn list(&self, landlord_id: &str) -> Result<Vec<Unit>>;
    async fn update_rent(&self, landlord_id: &str, unit_id: &str, rent: Decimal) -> Result<Unit>;
}
