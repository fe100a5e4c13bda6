use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::UNIT_PLACEHOLDER;

/// Domain model representing a renter under one landlord
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub landlord_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Unit identifier as a free-form string, not a foreign key.
    /// Empty or the placeholder value means "no unit assigned".
    pub unit: String,
    pub rent_amount: Decimal,
    pub status: TenantStatus,
    pub move_in_date: Option<NaiveDate>,
    pub lease_end_date: Option<NaiveDate>,
}

impl Tenant {
    /// True when the tenant's unit field names an actual unit
    pub fn has_unit_assignment(&self) -> bool {
        let unit = self.unit.trim();
        !unit.is_empty() && unit != UNIT_PLACEHOLDER
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Late,
    Notice,
    Inactive,
}

impl TenantStatus {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(TenantStatus::Active),
            "late" => Some(TenantStatus::Late),
            "notice" => Some(TenantStatus::Notice),
            "inactive" => Some(TenantStatus::Inactive),
            _ => None,
        }
    }
}

/// Gateway row for the `tenants` table.
///
/// The remote rows are loosely shaped; every optional column is parsed here,
/// once, so the rest of the crate only ever sees a well-formed [`Tenant`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantRow {
    pub id: String,
    pub landlord_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub rent_amount: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub move_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub lease_end_date: Option<NaiveDate>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        let status = match row.status.as_deref() {
            Some(raw) => TenantStatus::parse(raw).unwrap_or_else(|| {
                warn!("Tenant {} has unknown status '{}'", row.id, raw);
                TenantStatus::Inactive
            }),
            None => TenantStatus::Inactive,
        };

        Self {
            id: row.id,
            landlord_id: row.landlord_id,
            name: row.name,
            email: row.email.unwrap_or_default(),
            phone: row.phone,
            unit: row.unit.unwrap_or_default(),
            rent_amount: row.rent_amount.unwrap_or_default(),
            status,
            move_in_date: row.move_in_date,
            lease_end_date: row.lease_end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tenant(unit: &str) -> Tenant {
        Tenant {
            id: "t-1".to_string(),
            landlord_id: "l-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            unit: unit.to_string(),
            rent_amount: dec!(1000),
            status: TenantStatus::Active,
            move_in_date: None,
            lease_end_date: None,
        }
    }

    #[test]
    fn placeholder_and_empty_units_are_not_assignments() {
        assert!(tenant("101").has_unit_assignment());
        assert!(!tenant("").has_unit_assignment());
        assert!(!tenant("   ").has_unit_assignment());
        assert!(!tenant(UNIT_PLACEHOLDER).has_unit_assignment());
    }

    #[test]
    fn unknown_status_degrades_to_inactive() {
        let row = TenantRow {
            id: "t-1".to_string(),
            landlord_id: "l-1".to_string(),
            name: "Ana".to_string(),
            email: None,
            phone: None,
            unit: None,
            rent_amount: None,
            status: Some("???".to_string()),
            move_in_date: None,
            lease_end_date: None,
        };

        let tenant: Tenant = row.into();
        assert_eq!(tenant.status, TenantStatus::Inactive);
        assert_eq!(tenant.rent_amount, Decimal::ZERO);
        assert!(!tenant.has_unit_assignment());
    }
}
