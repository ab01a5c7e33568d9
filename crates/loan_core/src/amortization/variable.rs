//! Hybrid variable-rate calculator.
//!
//! A loan starts with a fixed phase at [`INITIAL_RATE_PERCENT`] paying the
//! full-term annuity. After the fixed phase the annual rate climbs every
//! year by a randomised step and each period is re-amortised over the
//! remaining term at the new rate. Payments in the variable phase never
//! decrease from one period to the next, except in the period that retires
//! the balance. That period pays exactly the balance plus interest, and any
//! periods after it are zero rows.

use super::annuity::{annuity_payment, ensure_finite, format_percent};
use super::fixed::reconcile_last;
use crate::rng::RateShockSource;
use crate::types::schedule::ScheduleEntry;
use crate::types::{LoanError, LoanRequest, LoanResult};

/// Reference index in percent.
pub const BASE_INDEX_PERCENT: f64 = 8.3;
/// Lender margin over the index in percent.
pub const FIXED_MARGIN_PERCENT: f64 = 5.0;
/// Annual rate of the fixed phase in percent.
pub const INITIAL_RATE_PERCENT: f64 = BASE_INDEX_PERCENT + FIXED_MARGIN_PERCENT;
/// Deterministic part of the yearly rate step, as a fraction.
pub const BASE_ANNUAL_INCREASE: f64 = 0.002;
/// Width of the random part of the yearly rate step, as a fraction.
pub const RANDOM_ANNUAL_INCREASE: f64 = 0.003;
/// Upper bound (exclusive) of the lift applied to a payment that would drop.
pub const MAX_PAYMENT_LIFT: f64 = 2.0;

/// Builds the amortization table of a hybrid variable-rate loan.
///
/// `monthly_payment` in the result is the fixed-phase payment, i.e. the
/// annuity that would amortise the principal over the full term at the
/// initial rate. A fixed period at or beyond the term yields a schedule with
/// no variable phase.
///
/// The principal column always sums to the loan amount and no balance goes
/// below zero: a payment lifted past the outstanding balance is cut back to
/// a settling payment.
///
/// # Errors
///
/// Returns [`LoanError::NumericalFailure`] if the schedule overflows.
///
/// # Examples
///
/// ```
/// use loan_core::amortization::calculate_variable;
/// use loan_core::rng::FixedSequence;
/// use loan_core::types::{InterestType, LoanRequest};
///
/// let request = LoanRequest::new(50_000.0, 3.0, InterestType::Variable)
///     .unwrap()
///     .with_fixed_period_months(18);
/// let mut rng = FixedSequence::constant(0.5);
/// let result = calculate_variable(&request, &mut rng).unwrap();
///
/// assert_eq!(result.rate_type, "Hybrid (1 year/6 months at 13.3%)");
/// assert_eq!(result.amortization_table.len(), 36);
/// ```
pub fn calculate_variable<R: RateShockSource>(
    request: &LoanRequest,
    rng: &mut R,
) -> Result<LoanResult, LoanError> {
    let periods = request.periods();
    let fixed_months = (request.fixed_period_months() as usize).min(periods);
    let initial_annual = INITIAL_RATE_PERCENT / 100.0;
    let initial_monthly = initial_annual / 12.0;

    let fixed_payment = ensure_finite(
        annuity_payment(request.principal(), initial_monthly, periods),
        "fixed phase payment",
    )?;

    let mut entries = Vec::with_capacity(periods);
    let mut balance = request.principal();
    let mut last_payment: Option<f64> = None;
    let mut monthly_rate = initial_monthly;

    for period in 1..=periods {
        // Once retired, the remaining periods carry nothing and draw nothing
        if balance <= 0.0 {
            entries.push(ScheduleEntry::retired(period as u32));
            continue;
        }

        let payment = if period <= fixed_months {
            monthly_rate = initial_monthly;
            fixed_payment
        } else {
            let years_variable = (period - fixed_months - 1) / 12 + 1;
            let step = BASE_ANNUAL_INCREASE + rng.next_in_range(0.0, RANDOM_ANNUAL_INCREASE);
            monthly_rate = (initial_annual + step * years_variable as f64) / 12.0;

            let remaining = periods - period + 1;
            let reamortised = annuity_payment(balance, monthly_rate, remaining);
            match last_payment {
                Some(previous) if reamortised < previous => {
                    previous + rng.next_in_range(0.0, MAX_PAYMENT_LIFT)
                }
                _ => reamortised,
            }
        };
        let payment = ensure_finite(payment, "variable payment")?;

        let interest = balance * monthly_rate;
        let principal_paid = (payment - interest).max(0.0);
        let entry = if principal_paid >= balance {
            ScheduleEntry::settling(period as u32, balance, monthly_rate)
        } else {
            ScheduleEntry {
                period: period as u32,
                starting_balance: balance,
                payment,
                interest,
                principal: principal_paid,
                ending_balance: balance - principal_paid,
            }
        };

        entries.push(entry);
        balance = entry.ending_balance;
        last_payment = Some(entry.payment);
    }

    // A schedule retired early already ends on zero rows
    let open_at_end = entries.last().is_some_and(|last| last.starting_balance > 0.0);
    let entries = if open_at_end {
        reconcile_last(entries, monthly_rate)
    } else {
        entries
    };
    ensure_finite(entries[entries.len() - 1].payment, "final payment")?;

    LoanResult::from_entries(&entries, fixed_payment, hybrid_label(fixed_months as u32))
}

fn hybrid_label(fixed_months: u32) -> String {
    let years = fixed_months / 12;
    let months = fixed_months % 12;
    format!(
        "Hybrid ({} {}/{} {} at {}%)",
        years,
        if years == 1 { "year" } else { "years" },
        months,
        if months == 1 { "month" } else { "months" },
        format_percent(INITIAL_RATE_PERCENT)
    )
}
