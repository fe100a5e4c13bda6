// Module declarations
pub(crate) mod units_model;
pub(crate) mod units_repository;
pub(crate) mod units_traits;

// Re-export the public interface
pub use units_model::{Unit, UnitRow};
pub use units_repository::UnitRepository;
pub use units_traits::UnitRepositoryTrait;
