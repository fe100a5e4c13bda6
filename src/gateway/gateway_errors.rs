use thiserror::Error;

/// Custom error type for persistence-gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gateway returned {status} for '{table}': {detail}")]
    Status {
        table: String,
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("Failed to decode '{table}' rows: {detail}")]
    Decode { table: String, detail: String },

    #[error("Invalid gateway client configuration: {0}")]
    Config(String),
}
