// Module declarations
pub(crate) mod tenants_model;
pub(crate) mod tenants_repository;
pub(crate) mod tenants_traits;

// Re-export the public interface
pub use tenants_model::{Tenant, TenantRow, TenantStatus};
pub use tenants_repository::TenantRepository;
pub use tenants_traits::TenantRepositoryTrait;
