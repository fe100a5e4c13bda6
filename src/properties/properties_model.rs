use serde::{Deserialize, Serialize};

/// Domain model representing a property owned by a landlord
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub landlord_id: String,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    /// Declared capacity. May diverge from the actual unit row count;
    /// the core reports it as-is and never reconciles the two.
    pub total_units: u32,
}

/// Gateway row for the `properties` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRow {
    pub id: String,
    pub landlord_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_units: Option<u32>,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Self {
            id: row.id,
            landlord_id: row.landlord_id,
            name: row.name,
            address: row.address.unwrap_or_default(),
            description: row.description,
            total_units: row.total_units.unwrap_or_default(),
        }
    }
}
