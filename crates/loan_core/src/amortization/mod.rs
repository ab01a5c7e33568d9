//! Amortization calculators.
//!
//! This module provides:
//! - [`calculate_fixed`]: term-banded fixed-rate schedule
//! - [`calculate_variable`]: hybrid schedule with a fixed phase followed by
//!   stochastic yearly rate increases
//! - [`calculate`]: dispatch on [`InterestType`]
//! - [`assign_payment_dates`]: attach calendar dates to an emitted schedule
//!
//! Both calculators replace the formulaic last row with a reconciled one so
//! that every schedule ends at a zero balance.

mod annuity;
mod calendar;
mod fixed;
mod variable;

pub use annuity::annuity_payment;
pub use calendar::{assign_payment_dates, payment_date, MAX_PAYMENT_DAY};
pub use fixed::{
    calculate_fixed, fixed_annual_rate_percent, LONG_TERM_RATE_PERCENT, MEDIUM_TERM_RATE_PERCENT,
    SHORT_TERM_RATE_PERCENT,
};
pub use variable::{
    calculate_variable, BASE_ANNUAL_INCREASE, BASE_INDEX_PERCENT, FIXED_MARGIN_PERCENT,
    INITIAL_RATE_PERCENT, MAX_PAYMENT_LIFT, RANDOM_ANNUAL_INCREASE,
};

use crate::rng::RateShockSource;
use crate::types::{InterestType, LoanError, LoanRequest, LoanResult};

/// Computes the schedule for `request` with the calculator its interest type
/// selects. `rng` is only drawn from for variable-rate loans.
pub fn calculate<R: RateShockSource>(
    request: &LoanRequest,
    rng: &mut R,
) -> Result<LoanResult, LoanError> {
    match request.interest_type() {
        InterestType::Fixed => calculate_fixed(request),
        InterestType::Variable => calculate_variable(request, rng),
    }
}
