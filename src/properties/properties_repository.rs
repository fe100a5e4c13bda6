use std::sync::Arc;

use async_trait::async_trait;

use super::properties_model::{Property, PropertyRow};
use super::properties_traits::PropertyRepositoryTrait;
use crate::errors::Result;
use crate::gateway::{Filter, GatewayClient};

pub(crate) const PROPERTIES_TABLE: &str = "properties";

/// Gateway-backed repository for property records
pub struct PropertyRepository {
    client: Arc<GatewayClient>,
}

impl PropertyRepository {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PropertyRepositoryTrait for PropertyRepository {
    async fn list(&self, landlord_id: &str) -> Result<Vec<Property>> {
        let filter = Filter::new().eq("landlord_id", landlord_id);
        let rows: Vec<PropertyRow> = self.client.select(PROPERTIES_TABLE, &filter).await?;
        Ok(rows.into_iter().map(Property::from).collect())
    }
}
