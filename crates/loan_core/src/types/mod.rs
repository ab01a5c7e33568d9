//! Core types for loan amortization.
//!
//! This module provides:
//! - [`LoanRequest`] and [`InterestType`]: validated calculator inputs
//! - [`AmortizationRow`] and [`LoanResult`]: emitted schedule
//! - [`LoanError`]: structured calculation errors

pub mod error;
pub mod loan;
pub mod schedule;

pub use error::LoanError;
pub use loan::{
    period_count, InterestType, LoanRequest, DEFAULT_FIXED_PERIOD_MONTHS, MAX_PERIODS,
};
pub use schedule::{round_cents, AmortizationRow, LoanResult};
