// Module declarations
pub(crate) mod stats_model;
pub(crate) mod stats_service;

// Re-export the public interface
pub use stats_model::{DashboardStats, StatsOptions};
pub use stats_service::{compute_stats, StatsService};
