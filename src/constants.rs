use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Placeholder stored in a tenant's unit field when no unit is assigned
pub const UNIT_PLACEHOLDER: &str = "Sin unidad";

/// Rent difference below or at this amount is treated as a rounding artifact
pub const RENT_MISMATCH_TOLERANCE: Decimal = dec!(1);

/// Rent difference above this amount is a high-severity mismatch
pub const RENT_MISMATCH_HIGH: Decimal = dec!(100);

/// Rent difference above this amount is a medium-severity mismatch
pub const RENT_MISMATCH_MEDIUM: Decimal = dec!(50);

/// Default forward-looking window for upcoming move-ins
pub const DEFAULT_MOVE_IN_HORIZON_DAYS: i64 = 30;

/// Default forward-looking window for upcoming move-outs
pub const DEFAULT_MOVE_OUT_HORIZON_DAYS: i64 = 30;

/// Years offered around the current one when picking a ledger year
pub const LEDGER_YEAR_SPAN: i32 = 3;

/// Decimal precision for displayed rates
pub const RATE_DECIMAL_PRECISION: u32 = 2;
