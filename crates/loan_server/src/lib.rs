//! REST API server for loan amortization schedules
//!
//! Exposes the `loan_core` calculators over HTTP: `POST /api/calculate`
//! returns the payment schedule for a fixed or hybrid variable loan, and
//! `/health` and `/ready` serve load balancer probes.

pub mod config;
pub mod error;
pub mod request;
pub mod routes;
pub mod server;

// Re-export the calculation kernel for integration
pub use loan_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
