// Module declarations
pub(crate) mod consistency_detectors;
pub(crate) mod consistency_model;
pub(crate) mod consistency_service;

// Re-export the public interface
pub use consistency_model::{
    DataInconsistency, FixAction, InconsistencyKind, Severity, SuggestedFix, TenantSnapshot,
    UnitSnapshot,
};
pub use consistency_service::ConsistencyService;
