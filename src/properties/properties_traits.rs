use async_trait::async_trait;

use super::properties_model::Property;
use crate::errors::Result;

/// Trait defining the contract for property repository operations.
#[async_trait]
pub trait PropertyRepositoryTrait: Send + Sync {
    async fn list(&self, landlord_id: &str) -> Result<Vec<Property>>;
}
