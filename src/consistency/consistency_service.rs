use std::sync::Arc;

use log::{debug, error, warn};

use super::consistency_detectors::{
    detect_duplicate_assignments, detect_missing_data, detect_rent_mismatches,
    detect_unit_assignments,
};
use super::consistency_model::{DataInconsistency, FixAction};
use crate::errors::{Error, Result};
use crate::tenants::{Tenant, TenantRepositoryTrait};
use crate::units::{Unit, UnitRepositoryTrait};

/// Scans one landlord's tenants and units for divergences and applies the
/// auto-fixable remedies.
///
/// Stateless between calls: every scan re-reads and re-computes, and callers
/// re-scan after a fix instead of patching a cached result.
pub struct ConsistencyService {
    tenant_repo: Arc<dyn TenantRepositoryTrait>,
    unit_repo: Arc<dyn UnitRepositoryTrait>,
}

impl ConsistencyService {
    pub fn new(
        tenant_repo: Arc<dyn TenantRepositoryTrait>,
        unit_repo: Arc<dyn UnitRepositoryTrait>,
    ) -> Self {
        Self {
            tenant_repo,
            unit_repo,
        }
    }

    /// Runs every detector and returns the findings ranked by severity.
    ///
    /// Never fails: a failed entity read is logged and the detectors needing
    /// that collection are skipped, so one bad read cannot fabricate findings
    /// from half-loaded data or abort the detectors that can still run.
    /// The sort is stable, so ties keep detector order and detection order.
    pub async fn check_all(&self, landlord_id: &str) -> Vec<DataInconsistency> {
        let (tenants, units) = futures::join!(
            self.tenant_repo.list(landlord_id),
            self.unit_repo.list(landlord_id)
        );

        let tenants: Option<Vec<Tenant>> = match tenants {
            Ok(tenants) => Some(tenants),
            Err(e) => {
                error!("Tenant read failed during consistency scan: {}", e);
                None
            }
        };
        let units: Option<Vec<Unit>> = match units {
            Ok(units) => Some(units),
            Err(e) => {
                error!("Unit read failed during consistency scan: {}", e);
                None
            }
        };

        let mut findings = Vec::new();
        if let (Some(tenants), Some(units)) = (&tenants, &units) {
            findings.extend(detect_rent_mismatches(tenants, units));
            findings.extend(detect_unit_assignments(tenants, units));
        }
        if let Some(tenants) = &tenants {
            findings.extend(detect_missing_data(tenants));
            findings.extend(detect_duplicate_assignments(tenants));
        }

        findings.sort_by_key(|finding| finding.severity);

        debug!(
            "Consistency scan for {} produced {} findings",
            landlord_id,
            findings.len()
        );
        findings
    }

    /// Applies the finding's suggested fix when it is auto-fixable.
    ///
    /// Returns `Ok(false)` when the fix needs human judgment or the target
    /// record no longer exists; a gateway failure propagates so the caller
    /// can surface it.
    pub async fn auto_fix(
        &self,
        landlord_id: &str,
        inconsistency: &DataInconsistency,
    ) -> Result<bool> {
        if !inconsistency.suggested_fix.auto_fixable {
            return Ok(false);
        }

        let outcome = match &inconsistency.suggested_fix.action {
            FixAction::UpdateUnitRent { unit_id, rent } => self
                .unit_repo
                .update_rent(landlord_id, unit_id, *rent)
                .await
                .map(|_| ()),
            FixAction::UpdateTenantRent { tenant_id, rent } => self
                .tenant_repo
                .update_rent(landlord_id, tenant_id, *rent)
                .await
                .map(|_| ()),
            other => {
                warn!("Fix action {:?} is flagged auto-fixable but has no handler", other);
                return Ok(false);
            }
        };

        match outcome {
            Ok(()) => Ok(true),
            Err(Error::NotFound(detail)) => {
                warn!("Auto-fix target vanished before the write: {}", detail);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
