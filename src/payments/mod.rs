// Module declarations
pub(crate) mod payments_model;
pub(crate) mod payments_repository;
pub(crate) mod payments_traits;

// Re-export the public interface
pub use payments_model::{NewPayment, Payment, PaymentRow, PaymentStatus};
pub use payments_repository::PaymentRepository;
pub use payments_traits::PaymentRepositoryTrait;
