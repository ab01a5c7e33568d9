//! Amortization table types.
//!
//! Calculators work on unrounded [`ScheduleEntry`] values and only round to
//! cents when emitting [`AmortizationRow`]s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LoanError;

/// Rounds a monetary amount to cents, half away from zero.
///
/// Negative zero is normalised so that fully repaid balances serialise as
/// `0.0` rather than `-0.0`.
///
/// # Examples
/// ```
/// use loan_core::types::round_cents;
///
/// assert_eq!(round_cents(1234.5678), 1234.57);
/// assert_eq!(round_cents(-0.0001).to_string(), "0");
/// ```
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Unrounded state of a single period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScheduleEntry {
    pub period: u32,
    pub starting_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub ending_balance: f64,
}

impl ScheduleEntry {
    /// Entry that retires the whole starting balance at the given rate.
    pub fn settling(period: u32, starting_balance: f64, monthly_rate: f64) -> Self {
        let interest = starting_balance * monthly_rate;
        Self {
            period,
            starting_balance,
            payment: starting_balance + interest,
            interest,
            principal: starting_balance,
            ending_balance: 0.0,
        }
    }

    /// Entry for a period after the balance has already been retired.
    pub fn retired(period: u32) -> Self {
        Self {
            period,
            starting_balance: 0.0,
            payment: 0.0,
            interest: 0.0,
            principal: 0.0,
            ending_balance: 0.0,
        }
    }
}

/// One emitted line of an amortization table, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    /// 1-based period index.
    pub period: u32,
    /// Balance owed at the start of the period.
    pub starting_balance: f64,
    /// Total paid in the period.
    pub payment: f64,
    /// Interest portion of the payment.
    pub interest: f64,
    /// Principal portion of the payment.
    pub principal: f64,
    /// Balance owed after the payment.
    pub ending_balance: f64,
    /// Calendar date of the payment, when a payment calendar was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

impl AmortizationRow {
    pub(crate) fn from_entry(entry: &ScheduleEntry) -> Result<Self, LoanError> {
        let row = Self {
            period: entry.period,
            starting_balance: round_cents(entry.starting_balance),
            payment: round_cents(entry.payment),
            interest: round_cents(entry.interest),
            principal: round_cents(entry.principal),
            ending_balance: round_cents(entry.ending_balance),
            payment_date: None,
        };

        let values = [
            row.starting_balance,
            row.payment,
            row.interest,
            row.principal,
            row.ending_balance,
        ];
        if values.iter().all(|v| v.is_finite()) {
            Ok(row)
        } else {
            Err(LoanError::NumericalFailure(format!(
                "period {} does not round to finite cents",
                entry.period
            )))
        }
    }
}

/// Complete outcome of a loan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    /// Representative monthly payment.
    pub monthly_payment: f64,
    /// Sum of all payments.
    pub total_payment: f64,
    /// Sum of all interest.
    pub total_interest: f64,
    /// One row per monthly period, in order.
    pub amortization_table: Vec<AmortizationRow>,
    /// Human-readable description of the rate regime.
    pub rate_type: String,
}

impl LoanResult {
    /// Builds the emitted result from unrounded entries.
    ///
    /// Totals are summed before rounding. Fails if any emitted amount is not
    /// finite once rounded.
    pub(crate) fn from_entries(
        entries: &[ScheduleEntry],
        monthly_payment: f64,
        rate_type: String,
    ) -> Result<Self, LoanError> {
        let total_payment: f64 = entries.iter().map(|e| e.payment).sum();
        let total_interest: f64 = entries.iter().map(|e| e.interest).sum();

        let result = Self {
            monthly_payment: round_cents(monthly_payment),
            total_payment: round_cents(total_payment),
            total_interest: round_cents(total_interest),
            amortization_table: entries
                .iter()
                .map(AmortizationRow::from_entry)
                .collect::<Result<Vec<_>, _>>()?,
            rate_type,
        };

        for (what, value) in [
            ("monthly payment", result.monthly_payment),
            ("total payment", result.total_payment),
            ("total interest", result.total_interest),
        ] {
            if !value.is_finite() {
                return Err(LoanError::NumericalFailure(format!("{} is not finite", what)));
            }
        }
        Ok(result)
    }

    /// Number of periods in the table.
    #[inline]
    pub fn periods(&self) -> usize {
        self.amortization_table.len()
    }
}
