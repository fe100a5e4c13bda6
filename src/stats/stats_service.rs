use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use log::error;
use rust_decimal::Decimal;

use super::stats_model::{DashboardStats, StatsOptions};
use crate::constants::RATE_DECIMAL_PRECISION;
use crate::payments::{Payment, PaymentRepositoryTrait, PaymentStatus};
use crate::properties::{Property, PropertyRepositoryTrait};
use crate::tenants::{Tenant, TenantRepositoryTrait, TenantStatus};
use crate::units::{Unit, UnitRepositoryTrait};

/// Derives the dashboard metrics from already-loaded entity sets.
///
/// Pure and deterministic: `today` anchors the current-month and
/// forward-looking windows, inputs are read-only, and the result is freshly
/// allocated.
pub fn compute_stats(
    tenants: &[Tenant],
    properties: &[Property],
    units: &[Unit],
    payments: &[Payment],
    today: NaiveDate,
    options: &StatsOptions,
) -> DashboardStats {
    let total_units = units.len();
    let occupied_units = units.iter().filter(|u| !u.is_available).count();

    let expected_monthly_revenue: Decimal = units
        .iter()
        .filter(|u| !u.is_available)
        .map(|u| u.rent_amount)
        .sum();

    let current_month = |date: NaiveDate| {
        date.year() == today.year() && date.month() == today.month()
    };

    let completed_this_month: Vec<&Payment> = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed && current_month(p.payment_date))
        .collect();

    let collected_monthly_revenue: Decimal =
        completed_this_month.iter().map(|p| p.amount).sum();

    let active: Vec<&Tenant> = tenants
        .iter()
        .filter(|t| t.status == TenantStatus::Active)
        .collect();

    let paid_tenants: HashSet<&str> = completed_this_month
        .iter()
        .map(|p| p.tenant_id.as_str())
        .collect();
    let active_paid = active
        .iter()
        .filter(|t| paid_tenants.contains(t.id.as_str()))
        .count();

    let occupancy_rate = rate(occupied_units, total_units);
    let collection_rate = rate(active_paid, active.len());

    let in_window = |date: NaiveDate, horizon_days: i64| {
        date >= today && date <= today + Duration::days(horizon_days)
    };
    let upcoming_move_ins = tenants
        .iter()
        .filter_map(|t| t.move_in_date)
        .filter(|d| in_window(*d, options.move_in_horizon_days))
        .count();
    let upcoming_move_outs = tenants
        .iter()
        .filter_map(|t| t.lease_end_date)
        .filter(|d| in_window(*d, options.move_out_horizon_days))
        .count();

    DashboardStats {
        total_properties: properties.len(),
        total_units,
        occupied_units,
        vacant_units: total_units - occupied_units,
        active_tenants: active.len(),
        expected_monthly_revenue,
        collected_monthly_revenue,
        occupancy_rate,
        collection_rate,
        upcoming_move_ins,
        upcoming_move_outs,
    }
}

fn rate(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part as u64) * Decimal::ONE_HUNDRED / Decimal::from(whole as u64))
        .round_dp(RATE_DECIMAL_PRECISION)
}

/// Loads one landlord's entity sets and computes the dashboard metrics
pub struct StatsService {
    tenant_repo: Arc<dyn TenantRepositoryTrait>,
    property_repo: Arc<dyn PropertyRepositoryTrait>,
    unit_repo: Arc<dyn UnitRepositoryTrait>,
    payment_repo: Arc<dyn PaymentRepositoryTrait>,
    options: StatsOptions,
}

impl StatsService {
    pub fn new(
        tenant_repo: Arc<dyn TenantRepositoryTrait>,
        property_repo: Arc<dyn PropertyRepositoryTrait>,
        unit_repo: Arc<dyn UnitRepositoryTrait>,
        payment_repo: Arc<dyn PaymentRepositoryTrait>,
    ) -> Self {
        Self {
            tenant_repo,
            property_repo,
            unit_repo,
            payment_repo,
            options: StatsOptions::default(),
        }
    }

    pub fn with_options(mut self, options: StatsOptions) -> Self {
        self.options = options;
        self
    }

    /// Computes the dashboard for today.
    ///
    /// The four reads are independent and run concurrently; a failed read
    /// degrades its collection to empty (logged) so the dashboard still
    /// renders the metrics that do not depend on it.
    pub async fn dashboard_stats(&self, landlord_id: &str) -> DashboardStats {
        let (tenants, properties, units, payments) = futures::join!(
            self.tenant_repo.list(landlord_id),
            self.property_repo.list(landlord_id),
            self.unit_repo.list(landlord_id),
            self.payment_repo.list(landlord_id)
        );

        let tenants = tenants.unwrap_or_else(|e| {
            error!("Tenant read failed while computing stats: {}", e);
            Vec::new()
        });
        let properties = properties.unwrap_or_else(|e| {
            error!("Property read failed while computing stats: {}", e);
            Vec::new()
        });
        let units = units.unwrap_or_else(|e| {
            error!("Unit read failed while computing stats: {}", e);
            Vec::new()
        });
        let payments = payments.unwrap_or_else(|e| {
            error!("Payment read failed while computing stats: {}", e);
            Vec::new()
        });

        compute_stats(
            &tenants,
            &properties,
            &units,
            &payments,
            Utc::now().date_naive(),
            &self.options,
        )
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::errors::{Error, Result};
    use crate::gateway::GatewayError;
    use crate::payments::NewPayment;

    fn tenant(id: &str, status: TenantStatus) -> Tenant {
        Tenant {
            id: id.to_string(),
            landlord_id: "l-1".to_string(),
            name: format!("Tenant {}", id),
            email: String::new(),
            phone: None,
            unit: "101".to_string(),
            rent_amount: dec!(1000),
            status,
            move_in_date: None,
            lease_end_date: None,
        }
    }

    fn unit(id: &str, rent: Decimal, is_available: bool) -> Unit {
        Unit {
            id: id.to_string(),
            property_id: "p-1".to_string(),
            unit_number: id.to_string(),
            tenant_id: None,
            rent_amount: rent,
            is_available,
        }
    }

    fn property(id: &str) -> Property {
        Property {
            id: id.to_string(),
            landlord_id: "l-1".to_string(),
            name: format!("Property {}", id),
            address: String::new(),
            description: None,
            total_units: 0,
        }
    }

    fn payment(tenant_id: &str, date: NaiveDate, status: PaymentStatus) -> Payment {
        Payment {
            id: format!("pay-{}-{}", tenant_id, date),
            user_id: "l-1".to_string(),
            tenant_id: tenant_id.to_string(),
            amount: dec!(1000),
            payment_date: date,
            payment_method: "transfer".to_string(),
            status,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn occupancy_and_expected_revenue_from_the_reference_fixture() {
        let properties = vec![property("p-1"), property("p-2")];
        let units = vec![
            unit("u-1", dec!(1000), false),
            unit("u-2", dec!(1200), false),
            unit("u-3", dec!(800), true),
            unit("u-4", dec!(900), true),
            unit("u-5", dec!(950), true),
        ];
        let tenants = vec![
            tenant("t-1", TenantStatus::Active),
            tenant("t-2", TenantStatus::Active),
        ];

        let stats = compute_stats(
            &tenants,
            &properties,
            &units,
            &[],
            date(2025, 7, 15),
            &StatsOptions::default(),
        );

        assert_eq!(stats.total_properties, 2);
        assert_eq!(stats.total_units, 5);
        assert_eq!(stats.occupied_units, 2);
        assert_eq!(stats.vacant_units, 3);
        assert_eq!(stats.active_tenants, 2);
        assert_eq!(stats.expected_monthly_revenue, dec!(2200));
        assert_eq!(stats.occupancy_rate, dec!(40));
    }

    #[test]
    fn collection_rate_counts_only_completed_payments_this_month() {
        let tenants = vec![
            tenant("t-1", TenantStatus::Active),
            tenant("t-2", TenantStatus::Active),
            tenant("t-3", TenantStatus::Inactive),
        ];
        let today = date(2025, 7, 15);
        let payments = vec![
            payment("t-1", date(2025, 7, 3), PaymentStatus::Completed),
            payment("t-2", date(2025, 7, 5), PaymentStatus::Pending),
            payment("t-2", date(2025, 6, 28), PaymentStatus::Completed),
            payment("t-3", date(2025, 7, 8), PaymentStatus::Completed),
        ];

        let stats = compute_stats(
            &tenants,
            &[],
            &[],
            &payments,
            today,
            &StatsOptions::default(),
        );

        // t-1 paid in July; t-2's completed payment is June, pending does not count
        assert_eq!(stats.collection_rate, dec!(50));
        // collected revenue includes every completed July payment, regardless of status filters on tenants
        assert_eq!(stats.collected_monthly_revenue, dec!(2000));
    }

    #[test]
    fn empty_inputs_produce_zero_rates() {
        let stats = compute_stats(
            &[],
            &[],
            &[],
            &[],
            date(2025, 1, 1),
            &StatsOptions::default(),
        );

        assert_eq!(stats.occupancy_rate, Decimal::ZERO);
        assert_eq!(stats.collection_rate, Decimal::ZERO);
        assert_eq!(stats.expected_monthly_revenue, Decimal::ZERO);
        assert_eq!(stats.vacant_units, 0);
    }

    #[test]
    fn upcoming_windows_are_inclusive_of_both_edges() {
        let today = date(2025, 7, 15);
        let mut moving_in_today = tenant("t-1", TenantStatus::Active);
        moving_in_today.move_in_date = Some(today);
        let mut at_horizon = tenant("t-2", TenantStatus::Active);
        at_horizon.move_in_date = Some(today + Duration::days(30));
        let mut past_horizon = tenant("t-3", TenantStatus::Active);
        past_horizon.move_in_date = Some(today + Duration::days(31));
        let mut already_in = tenant("t-4", TenantStatus::Active);
        already_in.move_in_date = Some(today - Duration::days(1));
        let mut leaving = tenant("t-5", TenantStatus::Notice);
        leaving.lease_end_date = Some(today + Duration::days(14));

        let tenants = vec![moving_in_today, at_horizon, past_horizon, already_in, leaving];
        let stats = compute_stats(
            &tenants,
            &[],
            &[],
            &[],
            today,
            &StatsOptions::default(),
        );

        assert_eq!(stats.upcoming_move_ins, 2);
        assert_eq!(stats.upcoming_move_outs, 1);
    }

    #[test]
    fn horizons_are_configurable() {
        let today = date(2025, 7, 1);
        let mut far_out = tenant("t-1", TenantStatus::Active);
        far_out.move_in_date = Some(today + Duration::days(80));

        let options = StatsOptions {
            move_in_horizon_days: 90,
            move_out_horizon_days: 90,
        };
        let stats = compute_stats(&[far_out], &[], &[], &[], today, &options);
        assert_eq!(stats.upcoming_move_ins, 1);
    }

    struct MockTenantRepo(Vec<Tenant>);
    struct MockPropertyRepo(Vec<Property>);
    struct MockUnitRepo(Vec<Unit>);
    struct FailingPaymentRepo;

    #[async_trait]
    impl TenantRepositoryTrait for MockTenantRepo {
        async fn list(&self, _landlord_id: &str) -> Result<Vec<Tenant>> {
            Ok(self.0.clone())
        }
        async fn get(&self, _landlord_id: &str, tenant_id: &str) -> Result<Tenant> {
            self.0
                .iter()
                .find(|t| t.id == tenant_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(tenant_id.to_string()))
        }
        async fn update_rent(
            &self,
            _landlord_id: &str,
            _tenant_id: &str,
            _rent: Decimal,
        ) -> Result<Tenant> {
            unimplemented!()
        }
        async fn delete(&self, _landlord_id: &str, _tenant_id: &str) -> Result<()> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl PropertyRepositoryTrait for MockPropertyRepo {
        async fn list(&self, _landlord_id: &str) -> Result<Vec<Property>> {
            Ok(self.0.clone())
        }
    }

    #[async_trait]
    impl UnitRepositoryTrait for MockUnitRepo {
        async fn list(&self, _landlord_id: &str) -> Result<Vec<Unit>> {
            Ok(self.0.clone())
        }
        async fn update_rent(
            &self,
            _landlord_id: &str,
            _unit_id: &str,
            _rent: Decimal,
        ) -> Result<Unit> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl PaymentRepositoryTrait for FailingPaymentRepo {
        async fn list(&self, _user_id: &str) -> Result<Vec<Payment>> {
            Err(Error::DataAccess(GatewayError::Decode {
                table: "payments".to_string(),
                detail: "injected failure".to_string(),
            }))
        }
        async fn record(&self, _new_payment: NewPayment) -> Result<Payment> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn a_failed_payment_read_does_not_sink_the_dashboard() {
        let service = StatsService::new(
            Arc::new(MockTenantRepo(vec![tenant("t-1", TenantStatus::Active)])),
            Arc::new(MockPropertyRepo(vec![property("p-1")])),
            Arc::new(MockUnitRepo(vec![unit("u-1", dec!(1000), false)])),
            Arc::new(FailingPaymentRepo),
        );

        let stats = service.dashboard_stats("l-1").await;

        assert_eq!(stats.total_properties, 1);
        assert_eq!(stats.occupied_units, 1);
        assert_eq!(stats.expected_monthly_revenue, dec!(1000));
        assert_eq!(stats.collected_monthly_revenue, Decimal::ZERO);
        assert_eq!(stats.collection_rate, Decimal::ZERO);
    }
}
