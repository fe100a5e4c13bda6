// Module declarations
pub(crate) mod ledger_model;
pub(crate) mod ledger_repository;
pub(crate) mod ledger_service;
pub(crate) mod ledger_traits;

// Re-export the public interface
pub use ledger_model::{
    legacy_storage_key, LedgerCell, LedgerSnapshot, MonthIndex, ReceiptRecord, ReceiptRow,
};
pub use ledger_repository::ReceiptRepository;
pub use ledger_service::{year_options, LedgerService};
pub use ledger_traits::ReceiptRepositoryTrait;
