use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MOVE_IN_HORIZON_DAYS, DEFAULT_MOVE_OUT_HORIZON_DAYS};

/// Dashboard-level metrics derived from one landlord's entity sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: usize,
    pub total_units: usize,
    pub occupied_units: usize,
    pub vacant_units: usize,
    pub active_tenants: usize,
    /// Rent sum over occupied units. What the month should bring in,
    /// not what arrived.
    pub expected_monthly_revenue: Decimal,
    /// Completed payments dated in the reference month. What actually arrived.
    pub collected_monthly_revenue: Decimal,
    /// Percentage of units occupied, 0 when there are no units
    pub occupancy_rate: Decimal,
    /// Percentage of active tenants with a completed payment in the
    /// reference month, 0 when there are no active tenants
    pub collection_rate: Decimal,
    pub upcoming_move_ins: usize,
    pub upcoming_move_outs: usize,
}

/// Tuning knobs for the forward-looking counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOptions {
    /// Days ahead a move-in still counts as upcoming (inclusive window)
    pub move_in_horizon_days: i64,
    /// Days ahead a lease end still counts as an upcoming move-out
    pub move_out_horizon_days: i64,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            move_in_horizon_days: DEFAULT_MOVE_IN_HORIZON_DAYS,
            move_out_horizon_days: DEFAULT_MOVE_OUT_HORIZON_DAYS,
        }
    }
}
