use std::env;
use std::fmt::Display;
use std::time::Duration;

use crate::errors::ConfigError;

const ENV_GATEWAY_URL: &str = "RENTAFLUX_GATEWAY_URL";
const ENV_GATEWAY_KEY: &str = "RENTAFLUX_GATEWAY_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the persistence gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads the gateway settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(ENV_GATEWAY_URL)
            .map_err(|_| ConfigError::MissingKey(ENV_GATEWAY_URL.to_string()))?;
        let api_key = env::var(ENV_GATEWAY_KEY)
            .map_err(|_| ConfigError::MissingKey(ENV_GATEWAY_KEY.to_string()))?;

        if base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(format!(
                "{} must not be empty",
                ENV_GATEWAY_URL
            )));
        }

        Ok(Self::new(base_url, api_key))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Equality filter set applied to a gateway query.
///
/// Every clause renders as a `column=eq.value` query pair, the only filter
/// shape the core needs: all reads and writes are scoped by owner id plus at
/// most a handful of key columns.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(String, String)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.clauses
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Query pairs in the form reqwest's `query()` expects
    pub(crate) fn as_query(&self) -> &[(String, String)] {
        &self.clauses
    }
}
