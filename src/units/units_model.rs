use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a rentable unit within a property
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub property_id: String,
    /// Unique within a property; tenants reference it by this string
    pub unit_number: String,
    /// Back-reference only. The tenant is owned by the landlord, not the unit.
    pub tenant_id: Option<String>,
    pub rent_amount: Decimal,
    pub is_available: bool,
}

/// Gateway row for the `units` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitRow {
    pub id: String,
    pub property_id: String,
    pub unit_number: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub rent_amount: Option<Decimal>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl From<UnitRow> for Unit {
    fn from(row: UnitRow) -> Self {
        Self {
            id: row.id,
            property_id: row.property_id,
            unit_number: row.unit_number,
            tenant_id: row.tenant_id,
            rent_amount: row.rent_amount.unwrap_or_default(),
            is_available: row.is_available,
        }
    }
}
