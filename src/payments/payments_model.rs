use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model for one payment-ledger entry.
///
/// Payments are append-only: rows are inserted by the checkout webhook or by
/// manual entry and never edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub user_id: String,
    pub tenant_id: String,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// Input model for recording a payment manually
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub user_id: String,
    pub tenant_id: String,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub status: PaymentStatus,
}

impl NewPayment {
    /// Validates the payment before it is dispatched to the gateway
    pub fn validate(&self) -> Result<()> {
        if self.tenant_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantId".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Gateway row for the `payments` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        let status = match row.status.as_deref() {
            Some(raw) => PaymentStatus::parse(raw).unwrap_or_else(|| {
                warn!("Payment {:?} has unknown status '{}'", row.id, raw);
                PaymentStatus::Pending
            }),
            None => PaymentStatus::Pending,
        };

        Self {
            id: row.id.unwrap_or_default(),
            user_id: row.user_id,
            tenant_id: row.tenant_id,
            amount: row.amount.unwrap_or_default(),
            payment_date: row.payment_date,
            payment_method: row.payment_method.unwrap_or_default(),
            status,
        }
    }
}

impl From<NewPayment> for PaymentRow {
    fn from(new: NewPayment) -> Self {
        Self {
            id: None,
            user_id: new.user_id,
            tenant_id: new.tenant_id,
            amount: Some(new.amount),
            payment_date: new.payment_date,
            payment_method: Some(new.payment_method),
            status: Some(new.status.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_payment(amount: Decimal) -> NewPayment {
        NewPayment {
            user_id: "l-1".to_string(),
            tenant_id: "t-1".to_string(),
            amount,
            payment_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            payment_method: "transfer".to_string(),
            status: PaymentStatus::Completed,
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(new_payment(dec!(0)).validate().is_err());
        assert!(new_payment(dec!(-10)).validate().is_err());
        assert!(new_payment(dec!(0.01)).validate().is_ok());
    }

    #[test]
    fn rejects_missing_tenant() {
        let mut payment = new_payment(dec!(100));
        payment.tenant_id = "  ".to_string();
        assert!(payment.validate().is_err());
    }
}
