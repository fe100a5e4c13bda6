// Module declarations
pub(crate) mod properties_model;
pub(crate) mod properties_repository;
pub(crate) mod properties_traits;

// Re-export the public interface
pub use properties_model::{Property, PropertyRow};
pub use properties_repository::PropertyRepository;
pub use properties_traits::PropertyRepositoryTrait;
