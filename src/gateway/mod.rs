// Module declarations
pub(crate) mod gateway_client;
pub(crate) mod gateway_errors;
pub(crate) mod gateway_model;

// Re-export the public interface
pub use gateway_client::GatewayClient;
pub use gateway_errors::GatewayError;
pub use gateway_model::{Filter, GatewayConfig};
