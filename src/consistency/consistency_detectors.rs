use std::collections::HashMap;

use crate::constants::{RENT_MISMATCH_HIGH, RENT_MISMATCH_MEDIUM, RENT_MISMATCH_TOLERANCE};
use crate::tenants::Tenant;
use crate::units::Unit;

use super::consistency_model::{
    DataInconsistency, FixAction, InconsistencyKind, Severity, SuggestedFix, TenantSnapshot,
};

/// Tenants whose rent disagrees with their unit's listed rent by more than
/// the tolerance. The higher figure is treated as authoritative, so the fix
/// updates whichever side is lower.
pub(crate) fn detect_rent_mismatches(
    tenants: &[Tenant],
    units: &[Unit],
) -> Vec<DataInconsistency> {
    let mut findings = Vec::new();

    for tenant in tenants.iter().filter(|t| t.has_unit_assignment()) {
        let unit_number = tenant.unit.trim();
        let Some(unit) = units.iter().find(|u| u.unit_number == unit_number) else {
            continue;
        };

        let diff = (tenant.rent_amount - unit.rent_amount).abs();
        if diff <= RENT_MISMATCH_TOLERANCE {
            continue;
        }

        let severity = if diff > RENT_MISMATCH_HIGH {
            Severity::High
        } else if diff > RENT_MISMATCH_MEDIUM {
            Severity::Medium
        } else {
            Severity::Low
        };

        let (action, fix_description) = if tenant.rent_amount > unit.rent_amount {
            (
                FixAction::UpdateUnitRent {
                    unit_id: unit.id.clone(),
                    rent: tenant.rent_amount,
                },
                format!(
                    "Update unit {} rent to {}",
                    unit.unit_number, tenant.rent_amount
                ),
            )
        } else {
            (
                FixAction::UpdateTenantRent {
                    tenant_id: tenant.id.clone(),
                    rent: unit.rent_amount,
                },
                format!("Update {}'s rent to {}", tenant.name, unit.rent_amount),
            )
        };

        findings.push(
            DataInconsistency::new(
                InconsistencyKind::RentMismatch,
                severity,
                format!(
                    "{} pays {} but unit {} is listed at {}",
                    tenant.name, tenant.rent_amount, unit.unit_number, unit.rent_amount
                ),
                SuggestedFix {
                    action,
                    description: fix_description,
                    auto_fixable: true,
                },
            )
            .with_tenant(tenant)
            .with_unit(unit),
        );
    }

    findings
}

/// Tenants assigned to a unit number no unit record carries. Whether to
/// create the unit or correct the tenant needs human judgment.
pub(crate) fn detect_unit_assignments(
    tenants: &[Tenant],
    units: &[Unit],
) -> Vec<DataInconsistency> {
    tenants
        .iter()
        .filter(|tenant| tenant.has_unit_assignment())
        .filter(|tenant| {
            let unit_number = tenant.unit.trim();
            !units.iter().any(|u| u.unit_number == unit_number)
        })
        .map(|tenant| {
            DataInconsistency::new(
                InconsistencyKind::UnitAssignment,
                Severity::Medium,
                format!(
                    "{} is assigned to unit '{}' but no such unit exists",
                    tenant.name,
                    tenant.unit.trim()
                ),
                SuggestedFix {
                    action: FixAction::ReviewUnitAssignment,
                    description: format!(
                        "Create unit '{}' or correct the tenant's assignment",
                        tenant.unit.trim()
                    ),
                    auto_fixable: false,
                },
            )
            .with_tenant(tenant)
        })
        .collect()
}

/// Tenants missing the data the rest of the core depends on
pub(crate) fn detect_missing_data(tenants: &[Tenant]) -> Vec<DataInconsistency> {
    let mut findings = Vec::new();

    for tenant in tenants {
        if tenant.rent_amount <= rust_decimal::Decimal::ZERO {
            findings.push(
                DataInconsistency::new(
                    InconsistencyKind::MissingData,
                    Severity::Medium,
                    format!("{} has no rent amount set", tenant.name),
                    SuggestedFix {
                        action: FixAction::CompleteTenantData,
                        description: "Set the tenant's rent amount".to_string(),
                        auto_fixable: false,
                    },
                )
                .with_tenant(tenant),
            );
        }

        if !tenant.has_unit_assignment() {
            findings.push(
                DataInconsistency::new(
                    InconsistencyKind::MissingData,
                    Severity::Low,
                    format!("{} has no unit assigned", tenant.name),
                    SuggestedFix {
                        action: FixAction::CompleteTenantData,
                        description: "Assign the tenant to a unit".to_string(),
                        auto_fixable: false,
                    },
                )
                .with_tenant(tenant),
            );
        }
    }

    findings
}

/// Units claimed by more than one tenant. One finding per unit, listing
/// every conflicting tenant.
pub(crate) fn detect_duplicate_assignments(tenants: &[Tenant]) -> Vec<DataInconsistency> {
    let mut by_unit: HashMap<&str, Vec<&Tenant>> = HashMap::new();
    let mut unit_order: Vec<&str> = Vec::new();

    for tenant in tenants.iter().filter(|t| t.has_unit_assignment()) {
        let unit_number = tenant.unit.trim();
        let group = by_unit.entry(unit_number).or_default();
        if group.is_empty() {
            unit_order.push(unit_number);
        }
        group.push(tenant);
    }

    unit_order
        .into_iter()
        .filter_map(|unit_number| {
            let group = &by_unit[unit_number];
            if group.len() < 2 {
                return None;
            }

            let names: Vec<&str> = group.iter().map(|t| t.name.as_str()).collect();
            let snapshots: Vec<TenantSnapshot> =
                group.iter().map(|t| TenantSnapshot::from(*t)).collect();

            Some(
                DataInconsistency::new(
                    InconsistencyKind::DuplicateAssignment,
                    Severity::High,
                    format!(
                        "Unit '{}' is assigned to {} tenants: {}",
                        unit_number,
                        group.len(),
                        names.join(", ")
                    ),
                    SuggestedFix {
                        action: FixAction::ResolveDuplicateAssignment,
                        description: format!(
                            "Keep one tenant on unit '{}' and reassign the rest",
                            unit_number
                        ),
                        auto_fixable: false,
                    },
                )
                .with_conflicting_tenants(snapshots),
            )
        })
        .collect()
}
