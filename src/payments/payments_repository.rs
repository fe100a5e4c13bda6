use std::sync::Arc;

use async_trait::async_trait;

use super::payments_model::{NewPayment, Payment, PaymentRow};
use super::payments_traits::PaymentRepositoryTrait;
use crate::errors::{Error, Result};
use crate::gateway::{Filter, GatewayClient};

pub(crate) const PAYMENTS_TABLE: &str = "payments";

/// Gateway-backed repository for payment records
pub struct PaymentRepository {
    client: Arc<GatewayClient>,
}

impl PaymentRepository {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentRepositoryTrait for PaymentRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<Payment>> {
        let filter = Filter::new().eq("user_id", user_id);
        let rows: Vec<PaymentRow> = self.client.select(PAYMENTS_TABLE, &filter).await?;
        Ok(rows.into_iter().map(Payment::from).collect())
    }

    async fn record(&self, new_payment: NewPayment) -> Result<Payment> {
        new_payment.validate()?;

        let row: PaymentRow = new_payment.into();
        let stored: Vec<PaymentRow> = self.client.insert(PAYMENTS_TABLE, &[row]).await?;

        stored
            .into_iter()
            .next()
            .map(Payment::from)
            .ok_or_else(|| Error::NotFound("Inserted payment was not returned".to_string()))
    }
}
