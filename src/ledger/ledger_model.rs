use serde::{Deserialize, Serialize};

/// Zero-based calendar month, the only month representation domain code uses.
///
/// The persisted receipt row carries the month one-based; the two meet only
/// in the [`ReceiptRow`] conversions below, so neither convention can leak
/// across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthIndex(u32);

impl MonthIndex {
    /// January is 0, December is 11
    pub fn new(index: u32) -> Option<Self> {
        (index <= 11).then_some(Self(index))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// One-based month as persisted in receipt rows
    pub(crate) fn month_number(&self) -> u32 {
        self.0 + 1
    }

    /// Parses the one-based month of a persisted row
    pub(crate) fn from_month_number(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then(|| Self(month - 1))
    }
}

/// One tenant/month cell of the rent ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub user_id: String,
    pub tenant_id: String,
    pub year: i32,
    pub month: MonthIndex,
    /// Proof-of-payment flag, independent of the mark itself:
    /// the row existing means "marked paid", this means "I hold a receipt".
    pub has_receipt: bool,
}

impl ReceiptRecord {
    pub(crate) fn from_row(row: ReceiptRow) -> Option<Self> {
        let month = MonthIndex::from_month_number(row.month)?;
        Some(Self {
            user_id: row.user_id,
            tenant_id: row.tenant_id,
            year: row.year,
            month,
            has_receipt: row.has_receipt,
        })
    }

    pub(crate) fn to_row(&self) -> ReceiptRow {
        ReceiptRow {
            user_id: self.user_id.clone(),
            tenant_id: self.tenant_id.clone(),
            year: self.year,
            month: self.month.month_number(),
            has_receipt: self.has_receipt,
        }
    }
}

/// Gateway row for the `payment_receipts` table, month one-based
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRow {
    pub user_id: String,
    pub tenant_id: String,
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub has_receipt: bool,
}

/// In-memory projection of one tenant/month cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerCell {
    pub paid: bool,
    pub has_receipt: bool,
}

/// Everything loaded for one (landlord, year) pair
#[derive(Debug, Clone)]
pub struct LedgerSnapshot {
    pub records: Vec<ReceiptRecord>,
}

impl LedgerSnapshot {
    /// Cells marked paid (every stored row is a paid mark)
    pub fn paid(&self) -> impl Iterator<Item = &ReceiptRecord> {
        self.records.iter()
    }

    /// Cells with a receipt on file
    pub fn receipts(&self) -> impl Iterator<Item = &ReceiptRecord> {
        self.records.iter().filter(|r| r.has_receipt)
    }
}

/// Key of the legacy browser-local overlay this ledger superseded.
///
/// Used as a one-time import source only; the migration never deletes it.
pub fn legacy_storage_key(user_id: &str, year: i32) -> String {
    format!("payment_records_{}_{}", user_id, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_index_rejects_out_of_range() {
        assert!(MonthIndex::new(0).is_some());
        assert!(MonthIndex::new(11).is_some());
        assert!(MonthIndex::new(12).is_none());
        assert!(MonthIndex::from_month_number(0).is_none());
        assert!(MonthIndex::from_month_number(13).is_none());
    }

    #[test]
    fn month_round_trips_through_the_persisted_row() {
        for index in 0..12 {
            let month = MonthIndex::new(index).unwrap();
            let record = ReceiptRecord {
                user_id: "l-1".to_string(),
                tenant_id: "t-1".to_string(),
                year: 2025,
                month,
                has_receipt: true,
            };

            let row = record.to_row();
            assert_eq!(row.month, index + 1, "row months are one-based");

            let back = ReceiptRecord::from_row(row).unwrap();
            assert_eq!(back, record);
        }
    }

    #[test]
    fn rows_with_invalid_months_do_not_convert() {
        let row = ReceiptRow {
            user_id: "l-1".to_string(),
            tenant_id: "t-1".to_string(),
            year: 2025,
            month: 13,
            has_receipt: false,
        };
        assert!(ReceiptRecord::from_row(row).is_none());
    }

    #[test]
    fn legacy_key_matches_the_historical_pattern() {
        assert_eq!(
            legacy_storage_key("landlord-7", 2024),
            "payment_records_landlord-7_2024"
        );
    }
}
