use async_trait::async_trait;

use super::payments_model::{NewPayment, Payment};
use crate::errors::Result;

/// Trait defining the contract for payment repository operations.
#[async_trait]
pub trait PaymentRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<Payment>>;
    async fn record(&self, new_payment: NewPayment) -> Result<Payment>;
}
