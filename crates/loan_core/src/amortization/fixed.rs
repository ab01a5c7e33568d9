//! Fixed-rate calculator with term-banded annual rates.

use super::annuity::{annuity_payment, ensure_finite, format_percent};
use crate::types::{LoanError, LoanRequest, LoanResult};
use crate::types::schedule::ScheduleEntry;

/// Annual rate in percent for a term up to and including three years.
pub const SHORT_TERM_RATE_PERCENT: f64 = 16.0;
/// Annual rate in percent for a term up to and including six years.
pub const MEDIUM_TERM_RATE_PERCENT: f64 = 18.0;
/// Annual rate in percent for any longer term.
pub const LONG_TERM_RATE_PERCENT: f64 = 20.0;

/// Annual rate in percent for the given term.
///
/// # Examples
///
/// ```
/// use loan_core::amortization::fixed_annual_rate_percent;
///
/// assert_eq!(fixed_annual_rate_percent(3.0), 16.0);
/// assert_eq!(fixed_annual_rate_percent(3.01), 18.0);
/// assert_eq!(fixed_annual_rate_percent(6.01), 20.0);
/// ```
pub fn fixed_annual_rate_percent(term_years: f64) -> f64 {
    if term_years <= 3.0 {
        SHORT_TERM_RATE_PERCENT
    } else if term_years <= 6.0 {
        MEDIUM_TERM_RATE_PERCENT
    } else {
        LONG_TERM_RATE_PERCENT
    }
}

/// Builds the amortization table of a fixed-rate loan.
///
/// The level annuity payment is applied to every period, then the last row
/// is replaced by one that retires the remaining balance exactly. Totals are
/// taken from the reconciled table; `monthly_payment` is the first row's
/// payment.
///
/// # Errors
///
/// Returns [`LoanError::NumericalFailure`] if the schedule overflows.
pub fn calculate_fixed(request: &LoanRequest) -> Result<LoanResult, LoanError> {
    let rate_percent = fixed_annual_rate_percent(request.term_years());
    let monthly_rate = rate_percent / 100.0 / 12.0;
    let periods = request.periods();

    let payment = ensure_finite(
        annuity_payment(request.principal(), monthly_rate, periods),
        "fixed payment",
    )?;

    let entries = level_schedule(request.principal(), payment, monthly_rate, periods);
    let entries = reconcile_last(entries, monthly_rate);
    ensure_finite(entries[entries.len() - 1].payment, "final payment")?;

    let monthly_payment = entries[0].payment;
    LoanResult::from_entries(
        &entries,
        monthly_payment,
        format!("Fixed ({}%)", format_percent(rate_percent)),
    )
}

fn level_schedule(
    principal: f64,
    payment: f64,
    monthly_rate: f64,
    periods: usize,
) -> Vec<ScheduleEntry> {
    let mut entries = Vec::with_capacity(periods);
    let mut balance = principal;

    for period in 1..=periods {
        let interest = balance * monthly_rate;
        let principal_paid = payment - interest;
        let ending_balance = balance - principal_paid;

        entries.push(ScheduleEntry {
            period: period as u32,
            starting_balance: balance,
            payment,
            interest,
            principal: principal_paid,
            ending_balance,
        });
        balance = ending_balance;
    }

    entries
}

/// Replaces the final entry with one that settles its starting balance.
pub(crate) fn reconcile_last(
    mut entries: Vec<ScheduleEntry>,
    monthly_rate: f64,
) -> Vec<ScheduleEntry> {
    if let Some(last) = entries.pop() {
        entries.push(ScheduleEntry::settling(
            last.period,
            last.starting_balance,
            monthly_rate,
        ));
    }
    entries
}
