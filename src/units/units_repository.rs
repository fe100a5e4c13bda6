use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;

use super::units_model::{Unit, UnitRow};
use super::units_traits::UnitRepositoryTrait;
use crate::errors::{Error, Result};
use crate::gateway::{Filter, GatewayClient};

pub(crate) const UNITS_TABLE: &str = "units";

/// Gateway-backed repository for unit records
pub struct UnitRepository {
    client: Arc<GatewayClient>,
}

impl UnitRepository {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UnitRepositoryTrait for UnitRepository {
    async fn list(&self, landlord_id: &str) -> Result<Vec<Unit>> {
        let filter = Filter::new().eq("landlord_id", landlord_id);
        let rows: Vec<UnitRow> = self.client.select(UNITS_TABLE, &filter).await?;
        Ok(rows.into_iter().map(Unit::from).collect())
    }

    async fn update_rent(&self, landlord_id: &str, unit_id: &str, rent: Decimal) -> Result<Unit> {
        let filter = Filter::new()
            .eq("landlord_id", landlord_id)
            .eq("id", unit_id);
        let rows: Vec<UnitRow> = self
            .client
            .update(UNITS_TABLE, &filter, &json!({ "rent_amount": rent }))
            .await?;

        rows.into_iter()
            .next()
            .map(Unit::from)
            .ok_or_else(|| Error::NotFound(format!("Unit with id {} not found", unit_id)))
    }
}
