use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tenants::Tenant;
use crate::units::Unit;

/// Finding severity. Variant order is ranking order, so sorting findings by
/// severity puts High first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencyKind {
    RentMismatch,
    UnitAssignment,
    MissingData,
    DuplicateAssignment,
}

/// Remedy attached to a finding. The auto-fixable variants carry everything
/// needed to apply them, so no state has to be re-derived at fix time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FixAction {
    UpdateUnitRent { unit_id: String, rent: Decimal },
    UpdateTenantRent { tenant_id: String, rent: Decimal },
    ReviewUnitAssignment,
    CompleteTenantData,
    ResolveDuplicateAssignment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFix {
    #[serde(flatten)]
    pub action: FixAction,
    pub description: String,
    pub auto_fixable: bool,
}

/// Tenant fields captured when the finding was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSnapshot {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub rent_amount: Decimal,
}

impl From<&Tenant> for TenantSnapshot {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id.clone(),
            name: tenant.name.clone(),
            unit: tenant.unit.clone(),
            rent_amount: tenant.rent_amount,
        }
    }
}

/// Unit fields captured when the finding was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSnapshot {
    pub id: String,
    pub unit_number: String,
    pub rent_amount: Decimal,
}

impl From<&Unit> for UnitSnapshot {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id.clone(),
            unit_number: unit.unit_number.clone(),
            rent_amount: unit.rent_amount,
        }
    }
}

/// One detected divergence between related records.
///
/// Ephemeral by design: produced fresh on every scan, acted on or dismissed,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataInconsistency {
    pub id: String,
    pub kind: InconsistencyKind,
    pub severity: Severity,
    pub description: String,
    pub tenant: Option<TenantSnapshot>,
    pub unit: Option<UnitSnapshot>,
    /// Populated for duplicate-assignment findings only
    pub conflicting_tenants: Vec<TenantSnapshot>,
    pub suggested_fix: SuggestedFix,
    pub detected_at: DateTime<Utc>,
}

impl DataInconsistency {
    pub(crate) fn new(
        kind: InconsistencyKind,
        severity: Severity,
        description: String,
        suggested_fix: SuggestedFix,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            severity,
            description,
            tenant: None,
            unit: None,
            conflicting_tenants: Vec::new(),
            suggested_fix,
            detected_at: Utc::now(),
        }
    }

    pub(crate) fn with_tenant(mut self, tenant: &Tenant) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub(crate) fn with_unit(mut self, unit: &Unit) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub(crate) fn with_conflicting_tenants(mut self, tenants: Vec<TenantSnapshot>) -> Self {
        self.conflicting_tenants = tenants;
        self
    }
}
