//! Core domain logic for RentaFlux: rent ledger reconciliation, tenant/unit
//! consistency checking, and dashboard statistics. Persistence lives behind
//! the external record-store gateway; this crate only consumes its contract.

pub mod constants;
pub mod errors;
pub mod gateway;

pub mod consistency;
pub mod ledger;
pub mod payments;
pub mod properties;
pub mod stats;
pub mod tenants;
pub mod units;

pub use errors::{Error, Result};
pub use gateway::{GatewayClient, GatewayConfig};
